//! Command-line commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use wildshape_domain::{
    compute_pf1e, get_tier_for_edl, validate_compute_input, ComputeInput, CreatureSize,
    ElementType, FormKind, FormProvider, Tier,
};

use crate::character::load_character;
use crate::config::OutputFormat;

pub const USAGE: &str = "\
Usage: wildshape-engine <command>

Commands:
  compute <character.json> <form-id> <tier> <size> [element]
  forms [kind]
  tiers <edl>
  sizes <tier>";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Compute {
        character: PathBuf,
        form_id: String,
        tier: Tier,
        size: CreatureSize,
        element: Option<ElementType>,
    },
    Forms {
        kind: Option<FormKind>,
    },
    Tiers {
        edl: u8,
    },
    Sizes {
        tier: Tier,
    },
}

fn required<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Missing <{name}>\n\n{USAGE}"))
}

impl Command {
    /// Parse the arguments that follow the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            anyhow::bail!("{USAGE}");
        };
        let command = match name.as_str() {
            "compute" => Self::Compute {
                character: PathBuf::from(required(rest, 0, "character.json")?),
                form_id: required(rest, 1, "form-id")?.to_string(),
                tier: required(rest, 2, "tier")?.parse()?,
                size: required(rest, 3, "size")?.parse()?,
                element: rest.get(4).map(|s| s.parse()).transpose()?,
            },
            "forms" => Self::Forms {
                kind: rest.first().map(|s| s.parse()).transpose()?,
            },
            "tiers" => Self::Tiers {
                edl: required(rest, 0, "edl")?
                    .parse()
                    .context("<edl> must be a level between 0 and 255")?,
            },
            "sizes" => Self::Sizes {
                tier: required(rest, 0, "tier")?.parse()?,
            },
            other => anyhow::bail!("Unknown command: {other}\n\n{USAGE}"),
        };
        Ok(command)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormSummary {
    id: String,
    name: String,
    kind: FormKind,
    size: CreatureSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<ElementType>,
}

fn render<T: Serialize>(value: &T, output: OutputFormat) -> Result<String> {
    let text = match output {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    text.context("Failed to serialize output")
}

/// Run a command and return what should be printed.
pub fn run(command: &Command, forms: &dyn FormProvider, output: OutputFormat) -> Result<String> {
    match command {
        Command::Compute {
            character,
            form_id,
            tier,
            size,
            element,
        } => {
            let base = load_character(character)
                .with_context(|| format!("Loading character {}", character.display()))?;
            let form = forms.get_form(form_id)?;
            let mut input = ComputeInput::new(base, form, *tier, *size);
            input.element = *element;

            validate_compute_input(&input)?;
            let sheet = compute_pf1e(&input);
            tracing::info!(
                form = %sheet.form_id,
                tier = %sheet.tier,
                size = %sheet.size,
                "Computed playsheet"
            );
            render(&sheet, output)
        }
        Command::Forms { kind } => {
            let listed = match kind {
                Some(kind) => forms.forms_of_kind(*kind),
                None => forms.list_forms(),
            };
            let summaries: Vec<FormSummary> = listed
                .into_iter()
                .map(|form| FormSummary {
                    id: form.id,
                    name: form.name,
                    kind: form.kind,
                    size: form.size,
                    element: form.element,
                })
                .collect();
            render(&summaries, output)
        }
        Command::Tiers { edl } => render(&get_tier_for_edl(*edl), output),
        Command::Sizes { tier } => render(&tier.allowed_sizes(), output),
    }
}
