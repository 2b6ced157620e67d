// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

// --- PlotStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
  pub nucleus_color: (f64, f64, f64),
  pub nucleus_alpha: f64,
  pub shell_color: (f64, f64, f64),
  pub shell_alpha: f64,
  pub proton_color: (f64, f64, f64),
  pub neutron_color: (f64, f64, f64),
  pub electron_color: (f64, f64, f64),
  /// Marker radius in pixels
  pub marker_size: u32,
  /// Draw every n-th grid line of a shell wireframe
  pub wireframe_stride: usize,
  /// Merge n x n grid cells into one nucleus facet
  pub surface_stride: usize,
}

impl Default for PlotStyle {
  fn default() -> Self {
    Self {
      nucleus_color: (1.0, 0.0, 0.0),
      nucleus_alpha: 0.6,
      shell_color: (0.0, 0.0, 1.0),
      shell_alpha: 0.5,
      proton_color: (1.0, 0.0, 0.0),
      neutron_color: (0.5, 0.5, 0.5),
      electron_color: (0.0, 0.0, 1.0),
      marker_size: 3,
      wireframe_stride: 10,
      surface_stride: 5,
    }
  }
}

// --- ViewerSettings ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
  pub width: i32,
  pub height: i32,
  /// Every panel spans [-axis_limit, axis_limit] on all three axes.
  /// Big (mixed) atoms run past it.
  pub axis_limit: f64,
  /// Radians
  pub yaw: f64,
  pub pitch: f64,
}

impl Default for ViewerSettings {
  fn default() -> Self {
    Self {
      width: 1600,
      height: 800,
      axis_limit: 2.0,
      yaw: 0.5,
      pitch: 0.3,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
  /// Fixed seed for reproducible point clouds; random when absent.
  #[serde(default)]
  pub seed: Option<u64>,

  #[serde(default)]
  pub viewer: ViewerSettings,

  #[serde(default)]
  pub style: PlotStyle,
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/chemsim/settings.json).
  /// Always yields a usable config; the string describes what happened.
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (Self::sanitized(cfg), format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json).map(Self::sanitized)
  }

  /// Replaces values the viewer cannot draw with their defaults.
  fn sanitized(mut self) -> Self {
    let limit = self.viewer.axis_limit;
    if !(limit.is_finite() && limit > 0.0) {
      let fallback = ViewerSettings::default().axis_limit;
      log::warn!("viewer.axis_limit {} is not a positive number, using {}", limit, fallback);
      self.viewer.axis_limit = fallback;
    }
    self
  }

  fn get_path() -> PathBuf {
    // Must match the application id in main.rs
    if let Some(proj) = ProjectDirs::from("com", "example", "chemsim") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
