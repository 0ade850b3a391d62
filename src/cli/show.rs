//! Show command implementation (demo source display)

use std::process::ExitCode;

use crate::code_cache::CodeCache;
use crate::config::DemoKitConfig;
use crate::sources::{DemoSources, SourceLanguage};
use crate::suggest::{format_suggestion, suggest};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Which demo versions to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LanguageChoice {
    Cpp,
    Python,
    Both,
}

impl LanguageChoice {
    pub fn languages(self) -> &'static [SourceLanguage] {
        match self {
            Self::Cpp => &[SourceLanguage::Cpp],
            Self::Python => &[SourceLanguage::Python],
            Self::Both => &SourceLanguage::ALL,
        }
    }
}

/// Execute the show command
pub fn run_show(config: &DemoKitConfig, demo: &str, choice: LanguageChoice) -> ExitCode {
    let sources = DemoSources::from_config(config);
    let mut cache = CodeCache::new();
    let pair = sources.code_pair(&mut cache, demo);

    let shown: Vec<SourceLanguage> =
        choice.languages().iter().copied().filter(|lang| !pair.get(*lang).is_empty()).collect();

    if shown.is_empty() {
        eprintln!("Error: No {} source found for demo '{}'", describe(choice), demo);
        let mut known: Vec<String> =
            choice.languages().iter().flat_map(|lang| sources.list_demos(*lang)).collect();
        known.sort();
        known.dedup();
        if let Some(hint) = format_suggestion(&suggest(demo, &known)) {
            eprintln!("{}", hint);
        }
        return ExitCode::from(EXIT_ERROR);
    }

    for (i, lang) in shown.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let code = pair.get(*lang);
        println!("=== {} ({}) ===", lang.label(), sources.source_path(demo, *lang).display());
        print!("{}", code);
        if !code.ends_with('\n') {
            println!();
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn describe(choice: LanguageChoice) -> &'static str {
    match choice {
        LanguageChoice::Cpp => "C++",
        LanguageChoice::Python => "Python",
        LanguageChoice::Both => "C++ or Python",
    }
}
