//! forward モジュール
//!
//! Vietnamese → Katakana: syllable segmentation and fragment synthesis.

pub mod decomposer;
pub mod synthesizer;

/// 再エクスポート
pub use decomposer::{Decomposition, decompose};
pub use synthesizer::{ForwardSynthesizer, apply_preset, liquid_row};
