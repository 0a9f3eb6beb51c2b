//! Interactive session: template loading, the metadata form, and the
//! generation loop. Each step blocks on the previous one; a single user
//! action maps to a single round trip.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use dialoguer::{Confirm, Input, Select};
use planwright_core::vault::{DotenvVaultProvider, EnvVaultProvider, resolve_secret};
use planwright_core::{
    ClassPeriod, Config, CoreError, LessonForm, create_provider, generate_plan,
};
use planwright_template::TemplateExtractor;

pub async fn run(config: &Config, template_arg: Option<PathBuf>) -> anyhow::Result<()> {
    println!("planwright v{}", env!("CARGO_PKG_VERSION"));

    let extractor = TemplateExtractor::default();
    let template_text = load_template(&extractor, template_arg).await?;

    if Confirm::new()
        .with_prompt("View template preview?")
        .default(false)
        .interact()?
    {
        println!("\n--- Template preview ---");
        println!("{template_text}");
        println!("------------------------\n");
    }

    // Resolved once per session; passed explicitly into provider construction.
    let secrets_file = DotenvVaultProvider::load(Path::new(&config.secrets.file))
        .with_context(|| format!("loading secrets file '{}'", config.secrets.file))?;
    let api_key = resolve_secret(&config.llm.api_key_env, &[&EnvVaultProvider, &secrets_file])
        .await
        .context("resolving API key")?;

    loop {
        let form = collect_form()?;

        match create_provider(config, api_key.clone()) {
            Ok(provider) => {
                println!("Generating lesson plan...");
                match generate_plan(&provider, &template_text, &form).await {
                    Ok(plan) => {
                        println!("\n=== Generated Lesson Plan ===\n");
                        println!("{plan}");
                        println!();
                    }
                    Err(e) => {
                        tracing::error!("generation failed: {e}");
                        println!("Generation failed: {e}");
                    }
                }
            }
            Err(e @ CoreError::MissingApiKey { .. }) => {
                // The one error the tool promises to catch: no key, no network call.
                println!("{e}");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        if !Confirm::new()
            .with_prompt("Generate another lesson plan?")
            .default(false)
            .interact()?
        {
            return Ok(());
        }
    }
}

/// Obtain template text, re-prompting for a new path on extraction failure.
async fn load_template(
    extractor: &TemplateExtractor,
    arg: Option<PathBuf>,
) -> anyhow::Result<String> {
    let mut pending = arg;
    loop {
        let path = match pending.take() {
            Some(p) => p,
            None => {
                let raw: String = Input::new()
                    .with_prompt("Path to lesson plan template (PDF)")
                    .interact_text()?;
                PathBuf::from(raw)
            }
        };

        match extractor.extract_file(&path).await {
            Ok(text) => {
                println!("Template loaded.");
                return Ok(text);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "template extraction failed: {e}");
                println!("Could not read template: {e}");
            }
        }
    }
}

fn collect_form() -> anyhow::Result<LessonForm> {
    let date: NaiveDate = Input::new()
        .with_prompt("Lesson date (YYYY-MM-DD)")
        .default(Local::now().date_naive())
        .interact_text()?;

    let period_idx = Select::new()
        .with_prompt("Class period")
        .items(&ClassPeriod::ALL)
        .default(0)
        .interact()?;

    let class_name: String = Input::new().with_prompt("Class name").interact_text()?;
    let instructor: String = Input::new().with_prompt("Instructor").interact_text()?;
    let unit_number: u32 = Input::new().with_prompt("Unit #").interact_text()?;
    let unit_name: String = Input::new().with_prompt("Unit name").interact_text()?;
    let lesson_number: u32 = Input::new().with_prompt("Lesson #").interact_text()?;
    let lesson_name: String = Input::new().with_prompt("Lesson name").interact_text()?;
    let standard: String = Input::new().with_prompt("Lesson standard").interact_text()?;
    let objective: String = Input::new().with_prompt("Lesson objective").interact_text()?;
    let description: String = Input::new()
        .with_prompt("Customization details for the lesson plan")
        .default("Describe the objectives, activities, differentiation techniques, etc.".into())
        .interact_text()?;

    Ok(LessonForm {
        date,
        class_period: ClassPeriod::ALL[period_idx],
        class_name,
        instructor,
        unit_number,
        unit_name,
        lesson_number,
        lesson_name,
        standard,
        objective,
        description,
    })
}
