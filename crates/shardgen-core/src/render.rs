//! Build-script template rendering.
//!
//! For each output script `<name>` the renderer looks for a template at
//! `<name>.in`, substitutes the shard's model list into it, and overwrites
//! `<name>` with the result. Template authors iterate over a single
//! `model_list` variable and access [`ModelDescriptor`] fields by name.
//! A missing template is not an error: that output is skipped so one
//! template set can serve several jobs.

use std::path::{Path, PathBuf};

use minijinja::{context, Environment};

use crate::error::ShardgenResult;
use crate::model::ModelDescriptor;

/// Suffix that marks a template file, appended to the output name
pub const TEMPLATE_SUFFIX: &str = ".in";

/// Render a template string with `model_list` bound to `models`.
pub fn render_str(template: &str, models: &[ModelDescriptor]) -> ShardgenResult<String> {
    let env = Environment::new();
    let rendered = env.render_str(template, context! { model_list => models })?;
    Ok(rendered)
}

/// Render one output script from its `.in` template.
///
/// Returns `Ok(false)` when the template does not exist (the output is
/// skipped), `Ok(true)` when the output file was written. The output is
/// overwritten unconditionally and always ends with a newline.
pub fn render_script(output: &Path, models: &[ModelDescriptor]) -> ShardgenResult<bool> {
    let template_path = template_path_for(output);
    if !template_path.is_file() {
        tracing::warn!("skip {}", output.display());
        return Ok(false);
    }

    let template = std::fs::read_to_string(&template_path)?;
    let mut rendered = render_str(&template, models)?;
    rendered.push('\n');
    std::fs::write(output, rendered)?;

    tracing::info!("wrote {}", output.display());
    Ok(true)
}

/// Render every output in `outputs`, skipping the ones without a template.
///
/// Returns the paths actually written. Outputs are processed in order and
/// written independently; a failure mid-loop leaves the earlier outputs in
/// place.
pub fn render_scripts<P: AsRef<Path>>(
    outputs: &[P],
    models: &[ModelDescriptor],
) -> ShardgenResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for output in outputs {
        let output = output.as_ref();
        if render_script(output, models)? {
            written.push(output.to_path_buf());
        }
    }
    Ok(written)
}

fn template_path_for(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(TEMPLATE_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShardgenError;

    fn descriptor(name: &str, index: u32) -> ModelDescriptor {
        ModelDescriptor {
            name: name.to_string(),
            index,
            language_tag: "en".to_string(),
            secondary_language_tag: None,
            short_name: Some(format!("{name}-short")),
            prep_commands: None,
            rule_fst_name: None,
            use_high_resolution: false,
        }
    }

    #[test]
    fn test_render_str_loops_over_model_list() {
        let models = vec![descriptor("foo", 0), descriptor("bar", 1)];
        let rendered = render_str(
            "{% for model in model_list %}{{ model.name }}\n{% endfor %}",
            &models,
        )
        .unwrap();
        assert_eq!(rendered, "foo\nbar\n");
    }

    #[test]
    fn test_render_str_exposes_fields_by_name() {
        let mut model = descriptor("foo", 7);
        model.use_high_resolution = true;
        let rendered = render_str(
            "{{ model_list[0].index }} {{ model_list[0].short_name }} \
             {{ model_list[0].use_high_resolution }}",
            std::slice::from_ref(&model),
        )
        .unwrap();
        assert_eq!(rendered, "7 foo-short true");
    }

    #[test]
    fn test_render_str_bad_syntax_is_template_error() {
        let err = render_str("{% for %}", &[]).unwrap_err();
        assert!(matches!(err, ShardgenError::TemplateError { .. }));
    }

    #[test]
    fn test_render_script_missing_template_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("build-apk-vad-asr.sh");
        let written = render_script(&output, &[descriptor("foo", 0)]).unwrap();
        assert!(!written);
        assert!(!output.exists());
    }

    #[test]
    fn test_render_script_writes_output_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("build-apk-vad-asr.sh");
        std::fs::write(
            template_path_for(&output),
            "{% for model in model_list %}{{ model.name }} {% endfor %}",
        )
        .unwrap();

        let models = vec![descriptor("foo", 0), descriptor("bar", 1)];
        assert!(render_script(&output, &models).unwrap());
        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, "foo bar \n");
    }

    #[test]
    fn test_render_script_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("build.sh");
        std::fs::write(&output, "stale content").unwrap();
        std::fs::write(template_path_for(&output), "fresh").unwrap();

        assert!(render_script(&output, &[]).unwrap());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "fresh\n");
    }

    #[test]
    fn test_render_scripts_reports_written_paths() {
        let dir = tempfile::tempdir().unwrap();
        let with_template = dir.path().join("a.sh");
        let without_template = dir.path().join("b.sh");
        std::fs::write(template_path_for(&with_template), "ok").unwrap();

        let written =
            render_scripts(&[with_template.clone(), without_template.clone()], &[]).unwrap();
        assert_eq!(written, vec![with_template]);
        assert!(!without_template.exists());
    }
}
