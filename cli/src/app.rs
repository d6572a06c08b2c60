use crate::{
    Command, FormatArg,
    config::{self, COOKIE_ENV, Config},
};
use color_eyre::eyre::{Result, WrapErr, eyre};
use crossnorm_core::{Puzzle, normalize};
use crossnorm_external::{DocumentFormat, PuzzleFile, export_clue_sheet, load_payload};
use crossnorm_providers::nyt;
use std::path::{Path, PathBuf};

pub struct App {
    /// Settings loaded at startup; flags override them per command.
    pub config: Config,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run a single command to completion.
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Normalize {
                input,
                output,
                format,
                clues_csv,
            } => self.normalize_file(&input, output, format, clues_csv.as_deref()),
            Command::Fetch {
                date,
                variant,
                output,
                raw,
            } => {
                let date = date.unwrap_or_else(nyt::today);
                let variant: nyt::NytVariant = variant.unwrap_or(self.config.default_variant).into();
                self.fetch(&date, variant, output, raw).await
            }
            Command::Config => self.show_config(),
        }
    }

    fn normalize_file(
        &self,
        input: &Path,
        output: Option<PathBuf>,
        format: Option<FormatArg>,
        clues_csv: Option<&Path>,
    ) -> Result<()> {
        let payload = load_payload(input)
            .wrap_err_with(|| format!("Failed to read payload from {}", input.display()))?;
        let puzzle = normalize(&payload)
            .wrap_err_with(|| format!("Failed to normalize {}", input.display()))?;

        let output = output.unwrap_or_else(|| self.config.output_path.clone());
        self.write_puzzle(&puzzle, &output, format)?;

        if let Some(path) = clues_csv {
            export_clue_sheet(&puzzle, path)
                .wrap_err_with(|| format!("Failed to write clue sheet {}", path.display()))?;
        }
        Ok(())
    }

    async fn fetch(
        &self,
        date: &str,
        variant: nyt::NytVariant,
        output: Option<PathBuf>,
        raw: bool,
    ) -> Result<()> {
        let cookie = self.config.nyt_cookie.clone().ok_or_else(|| {
            eyre!(
                "No NYT-S cookie configured; set {} or `nyt_cookie` in the config file",
                COOKIE_ENV
            )
        })?;
        let output = output.unwrap_or_else(|| self.config.output_path.clone());

        if raw {
            let text = nyt::download_raw(variant, date, &cookie)
                .await
                .wrap_err_with(|| format!("Failed to download {} for {}", variant.name(), date))?;
            std::fs::write(&output, text)
                .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
            tracing::info!(path = %output.display(), "wrote raw payload");
            return Ok(());
        }

        let payload = nyt::download(variant, date, &cookie)
            .await
            .wrap_err_with(|| format!("Failed to download {} for {}", variant.name(), date))?;
        let puzzle = normalize(&payload)
            .wrap_err_with(|| format!("Failed to normalize {} for {}", variant.name(), date))?;
        self.write_puzzle(&puzzle, &output, None)
    }

    fn write_puzzle(&self, puzzle: &Puzzle, output: &Path, format: Option<FormatArg>) -> Result<()> {
        let format = resolve_format(output, format)?;
        PuzzleFile::save(puzzle, output, format)
            .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

        tracing::info!(
            id = puzzle.id,
            date = %puzzle.publication_date,
            clues = puzzle.clues.len(),
            cells = puzzle.cells.len(),
            unresolved = puzzle.unresolved_clues().len(),
            "normalized puzzle"
        );
        Ok(())
    }

    fn show_config(&self) -> Result<()> {
        let path = config::config_path()?;
        let mut shown = self.config.clone();
        if shown.nyt_cookie.is_some() {
            shown.nyt_cookie = Some("<hidden>".to_string());
        }

        println!("Config file: {}", path.display());
        println!("{}", serde_json::to_string_pretty(&shown)?);
        Ok(())
    }
}

/// An explicit `--format` wins; otherwise the output extension decides.
fn resolve_format(output: &Path, explicit: Option<FormatArg>) -> Result<DocumentFormat> {
    match explicit {
        Some(format) => Ok(format.into()),
        None => Ok(DocumentFormat::from_path(output)?),
    }
}
