//! Built-in model catalogs.
//!
//! These mirror the release archives published under
//! `https://github.com/k2-fsa/sherpa-onnx/releases/download/asr-models/`.
//! The `index` values map to hardcoded constants in the downstream native
//! build code; do not renumber existing entries.

use super::types::{Catalog, ModelDescriptor};

/// Output scripts rendered for the VAD-ASR job
pub const VAD_ASR_SCRIPTS: &[&str] = &[
    "./build-apk-vad-asr.sh",
    "./build-hap-vad-asr.sh",
    "./build-apk-vad-asr-simulate-streaming.sh",
];

/// Output scripts rendered for the QNN VAD-ASR job
pub const QNN_VAD_ASR_SCRIPTS: &[&str] = &["./build-apk-qnn-vad-asr-simulate-streaming.sh"];

/// The VAD-ASR model catalog
#[must_use]
pub fn vad_asr() -> Catalog {
    Catalog::new(vec![
        ModelDescriptor {
            name: "sherpa-onnx-paraformer-zh-2023-09-14".to_string(),
            index: 0,
            language_tag: "zh_en".to_string(),
            secondary_language_tag: Some("Chinese,English".to_string()),
            short_name: Some("paraformer".to_string()),
            prep_commands: Some(
                r"
            if [ ! -f itn_zh_number.fst ]; then
              curl -SL -O https://github.com/k2-fsa/sherpa-onnx/releases/download/asr-models/itn_zh_number.fst
            fi
            pushd $model_name

            rm -fv README.md
            rm -rfv test_wavs
            rm -fv model.onnx

            ls -lh

            popd
            "
                .to_string(),
            ),
            rule_fst_name: Some("itn_zh_number.fst".to_string()),
            use_high_resolution: false,
        },
        ModelDescriptor {
            name: "sherpa-onnx-sense-voice-zh-en-ja-ko-yue-int8-2025-09-09".to_string(),
            index: 41,
            language_tag: "zh_en_ko_ja_yue".to_string(),
            secondary_language_tag: Some("中英粤日韩".to_string()),
            short_name: Some("sense_voice_2025_09_09_int8".to_string()),
            prep_commands: Some(
                r"
            pushd $model_name

            rm -rfv test_wavs

            ls -lh

            popd
            "
                .to_string(),
            ),
            rule_fst_name: None,
            use_high_resolution: true,
        },
    ])
}

/// The QNN VAD-ASR model catalog
#[must_use]
pub fn qnn_vad_asr() -> Catalog {
    let prep = r"
            pushd $model_name

            rm -rfv test_wavs

            ls -lh

            popd
            ";

    Catalog::new(vec![
        ModelDescriptor {
            name: "sherpa-onnx-qnn-8-seconds-sense-voice-zh-en-ja-ko-yue-2024-07-17-int8"
                .to_string(),
            index: 9001,
            language_tag: "zh_en_ko_ja_yue".to_string(),
            secondary_language_tag: None,
            short_name: Some("8-seconds-sense_voice_2024_07_17_int8".to_string()),
            prep_commands: Some(prep.to_string()),
            rule_fst_name: None,
            use_high_resolution: true,
        },
        ModelDescriptor {
            name: "sherpa-onnx-qnn-8-seconds-zipformer-ctc-zh-2025-07-03-int8".to_string(),
            index: 9012,
            language_tag: "zh".to_string(),
            secondary_language_tag: None,
            short_name: Some("8-seconds-zipformer_ctc_2025_07_03_int8".to_string()),
            prep_commands: Some(prep.to_string()),
            rule_fst_name: None,
            use_high_resolution: true,
        },
        ModelDescriptor {
            name: "sherpa-onnx-qnn-5-seconds-paraformer-zh-2025-10-07-int8".to_string(),
            index: 9024,
            language_tag: "zh".to_string(),
            secondary_language_tag: None,
            short_name: Some("5-seconds-paraformer_zh_2025_10_07_int8".to_string()),
            prep_commands: Some(prep.to_string()),
            rule_fst_name: None,
            use_high_resolution: true,
        },
    ])
}
