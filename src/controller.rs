// src/controller.rs
//
// Symbol entry -> validation -> generation -> presentation.
// All user interaction goes through `UiSurface`, so this module has no GUI
// dependency.

use crate::error::{ChemSimError, Result};
use crate::model::atom::{AtomModel, ModelRequest};
use crate::model::elements::ElementTable;
use crate::physics::generator::GeometrySource;
use std::rc::Rc;

pub const INPUT_TITLE: &str = "Element Input";
pub const ERROR_TITLE: &str = "Error";
pub const SINGLE_PROMPT: &str = "Enter the symbol of the element:";
pub const FIRST_PROMPT: &str = "Enter the first element symbol:";
pub const SECOND_PROMPT: &str = "Enter the second element symbol:";
pub const SINGLE_NOT_FOUND: &str = "Invalid element symbol or element not found.";
pub const PAIR_NOT_FOUND: &str = "Invalid element symbols or elements not found.";

/// Blocking calls into whatever shows things to the user.
pub trait UiSurface {
    /// `None` when the prompt was dismissed.
    fn prompt_symbol(&mut self, title: &str, message: &str) -> Option<String>;
    fn show_error(&mut self, title: &str, message: &str);
    /// Returns once the user closes the model view.
    fn show_model(&mut self, model: &AtomModel);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    AwaitingSingleInput,
    AwaitingFirstInput,
    AwaitingSecondInput,
    Validated,
    Presenting,
    ErrorShown,
}

pub struct Controller<G: GeometrySource> {
    table: Rc<ElementTable>,
    geometry: G,
    state: ControllerState,
}

impl<G: GeometrySource> Controller<G> {
    pub fn new(table: Rc<ElementTable>, geometry: G) -> Self {
        Self {
            table,
            geometry,
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    fn set_state(&mut self, next: ControllerState) {
        log::debug!("controller: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    // --- Validation (no UI, no generation) ---

    pub fn request_single(&self, symbol: Option<&str>) -> Result<ModelRequest> {
        let raw = symbol.unwrap_or_default();
        let (sym, z) = self.table.resolve(raw)?;
        Ok(ModelRequest::single(sym, z))
    }

    /// Both symbols must resolve; the error names every rejected one.
    pub fn request_mix(&self, first: Option<&str>, second: Option<&str>) -> Result<ModelRequest> {
        let a = self.request_single(first);
        let b = self.request_single(second);
        match (a, b) {
            (Ok(a), Ok(b)) => Ok(ModelRequest::mixed(&a, &b)),
            (a, b) => {
                let symbols = [a.err(), b.err()]
                    .into_iter()
                    .flatten()
                    .flat_map(|ChemSimError::ElementNotFound { symbols }| symbols)
                    .collect();
                Err(ChemSimError::ElementNotFound { symbols })
            }
        }
    }

    pub fn build_model(&mut self, request: ModelRequest) -> AtomModel {
        let geometry = self.geometry.generate(request.atomic_number);
        AtomModel {
            label: request.label,
            atomic_number: request.atomic_number,
            geometry,
        }
    }

    // --- Operations ---

    /// Shows one element, or an error dialog when the symbol is unknown.
    pub fn visualize(&mut self, symbol: Option<&str>, ui: &mut dyn UiSurface) -> Result<()> {
        let request = self.request_single(symbol);
        self.finish(request, SINGLE_NOT_FOUND, ui)
    }

    /// Shows the "mix" of two elements (Z1 + Z2).
    pub fn mix(
        &mut self,
        first: Option<&str>,
        second: Option<&str>,
        ui: &mut dyn UiSurface,
    ) -> Result<()> {
        let request = self.request_mix(first, second);
        self.finish(request, PAIR_NOT_FOUND, ui)
    }

    /// Prompts for a symbol, then [`Self::visualize`].
    pub fn run_visualize(&mut self, ui: &mut dyn UiSurface) -> Result<()> {
        self.set_state(ControllerState::AwaitingSingleInput);
        let symbol = ui.prompt_symbol(INPUT_TITLE, SINGLE_PROMPT);
        self.visualize(symbol.as_deref(), ui)
    }

    /// Prompts for both symbols before validating either, then [`Self::mix`].
    pub fn run_mix(&mut self, ui: &mut dyn UiSurface) -> Result<()> {
        self.set_state(ControllerState::AwaitingFirstInput);
        let first = ui.prompt_symbol(INPUT_TITLE, FIRST_PROMPT);
        self.set_state(ControllerState::AwaitingSecondInput);
        let second = ui.prompt_symbol(INPUT_TITLE, SECOND_PROMPT);
        self.mix(first.as_deref(), second.as_deref(), ui)
    }

    fn finish(
        &mut self,
        request: Result<ModelRequest>,
        not_found_message: &str,
        ui: &mut dyn UiSurface,
    ) -> Result<()> {
        let outcome = match request {
            Ok(request) => {
                self.set_state(ControllerState::Validated);
                let model = self.build_model(request);
                self.set_state(ControllerState::Presenting);
                log::info!(
                    "Presenting {} (Z = {}, {} shells)",
                    model.label,
                    model.atomic_number,
                    model.geometry.shells.len()
                );
                ui.show_model(&model);
                Ok(())
            }
            Err(e) => {
                log::warn!("{}", e);
                self.set_state(ControllerState::ErrorShown);
                ui.show_error(ERROR_TITLE, not_found_message);
                Err(e)
            }
        };
        self.set_state(ControllerState::Idle);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::AtomGeometry;
    use crate::model::elements::AtomicNumber;
    use crate::physics::generator::RandomGeometry;
    use std::collections::VecDeque;

    /// Scripted prompts, recorded output.
    #[derive(Default)]
    struct FakeUi {
        answers: VecDeque<Option<String>>,
        prompts: Vec<String>,
        errors: Vec<String>,
        shown: Vec<(String, AtomicNumber, usize)>,
    }

    impl FakeUi {
        fn answering(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
                ..Default::default()
            }
        }
    }

    impl UiSurface for FakeUi {
        fn prompt_symbol(&mut self, _title: &str, message: &str) -> Option<String> {
            self.prompts.push(message.to_string());
            self.answers.pop_front().flatten()
        }

        fn show_error(&mut self, _title: &str, message: &str) {
            self.errors.push(message.to_string());
        }

        fn show_model(&mut self, model: &AtomModel) {
            self.shown.push((
                model.label.clone(),
                model.atomic_number,
                model.geometry.shells.len(),
            ));
        }
    }

    /// Counts calls and delegates to a seeded generator.
    struct CountingGeometry {
        calls: Vec<AtomicNumber>,
        inner: RandomGeometry,
    }

    impl CountingGeometry {
        fn new() -> Self {
            Self {
                calls: Vec::new(),
                inner: RandomGeometry::seeded(1),
            }
        }
    }

    impl GeometrySource for CountingGeometry {
        fn generate(&mut self, z: AtomicNumber) -> AtomGeometry {
            self.calls.push(z);
            self.inner.generate(z)
        }
    }

    fn controller() -> Controller<CountingGeometry> {
        Controller::new(Rc::new(ElementTable::new()), CountingGeometry::new())
    }

    #[test]
    fn unknown_symbol_never_reaches_generator() {
        let mut c = controller();
        let mut ui = FakeUi::default();
        let err = c.visualize(Some("xx"), &mut ui).unwrap_err();
        assert_eq!(err, ChemSimError::not_found("xx"));
        assert!(c.geometry.calls.is_empty());
        assert!(ui.shown.is_empty());
        assert_eq!(ui.errors, vec![SINGLE_NOT_FOUND.to_string()]);
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn lowercase_helium_is_normalized() {
        let mut c = controller();
        let mut ui = FakeUi::default();
        c.visualize(Some("he"), &mut ui).unwrap();
        assert_eq!(c.geometry.calls, vec![2]);
        assert_eq!(ui.shown, vec![("He".to_string(), 2, 2)]);
        assert!(ui.errors.is_empty());
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn hydrogen_and_oxygen_mix_to_nine() {
        let c = controller();
        let req = c.request_mix(Some("H"), Some("O")).unwrap();
        assert_eq!(req, ModelRequest::single("H-O", 9));
    }

    #[test]
    fn iron_and_gold_mix_beyond_table() {
        let mut c = controller();
        let mut ui = FakeUi::default();
        c.mix(Some("fe"), Some("AU"), &mut ui).unwrap();
        assert_eq!(c.geometry.calls, vec![105]);
        assert_eq!(ui.shown, vec![("Fe-Au".to_string(), 105, 53)]);
    }

    #[test]
    fn mix_rejects_pair_when_either_misses() {
        let mut c = controller();
        let mut ui = FakeUi::default();
        let err = c.mix(Some("H"), Some("Qq"), &mut ui).unwrap_err();
        assert_eq!(err, ChemSimError::not_found("Qq"));
        let err = c.mix(Some("zz"), None, &mut ui).unwrap_err();
        assert_eq!(
            err,
            ChemSimError::ElementNotFound {
                symbols: vec!["zz".to_string(), String::new()]
            }
        );
        assert!(c.geometry.calls.is_empty());
        assert_eq!(ui.errors, vec![PAIR_NOT_FOUND.to_string(); 2]);
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn empty_and_cancelled_input_are_invalid() {
        let mut c = controller();
        let mut ui = FakeUi::answering(&[Some(""), None]);
        assert!(c.run_visualize(&mut ui).is_err());
        assert!(c.run_visualize(&mut ui).is_err());
        assert_eq!(ui.errors.len(), 2);
        assert!(c.geometry.calls.is_empty());
    }

    #[test]
    fn run_visualize_prompts_once() {
        let mut c = controller();
        let mut ui = FakeUi::answering(&[Some("c")]);
        c.run_visualize(&mut ui).unwrap();
        assert_eq!(ui.prompts, vec![SINGLE_PROMPT.to_string()]);
        assert_eq!(ui.shown, vec![("C".to_string(), 6, 4)]);
    }

    #[test]
    fn run_mix_asks_both_before_validating() {
        let mut c = controller();
        let mut ui = FakeUi::answering(&[Some("nope"), Some("O")]);
        assert!(c.run_mix(&mut ui).is_err());
        assert_eq!(
            ui.prompts,
            vec![FIRST_PROMPT.to_string(), SECOND_PROMPT.to_string()]
        );
        assert_eq!(ui.errors, vec![PAIR_NOT_FOUND.to_string()]);

        let mut ui = FakeUi::answering(&[Some("na"), Some("cl")]);
        c.run_mix(&mut ui).unwrap();
        assert_eq!(ui.shown, vec![("Na-Cl".to_string(), 28, 15)]);
    }

    #[test]
    fn retry_after_error_has_no_lingering_effects() {
        let mut c = controller();
        let mut ui = FakeUi::answering(&[Some("xx"), Some("n")]);
        assert!(c.run_visualize(&mut ui).is_err());
        c.run_visualize(&mut ui).unwrap();
        assert_eq!(ui.shown, vec![("N".to_string(), 7, 4)]);
        assert_eq!(c.geometry.calls, vec![7]);
    }
}
