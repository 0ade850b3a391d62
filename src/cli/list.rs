//! List command implementation

use std::collections::BTreeMap;
use std::process::ExitCode;

use crate::config::DemoKitConfig;
use crate::sources::{DemoSources, SourceLanguage};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the list command
pub fn run_list(config: &DemoKitConfig, lang: Option<SourceLanguage>) -> ExitCode {
    let sources = DemoSources::from_config(config);

    if let Some(lang) = lang {
        let demos = sources.list_demos(lang);
        if demos.is_empty() {
            eprintln!("No {} demos found in {}", lang, sources.folder(lang).display());
            return ExitCode::from(EXIT_ERROR);
        }
        for demo in demos {
            println!("{}", demo);
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    // demo name -> languages it exists in
    let mut table: BTreeMap<String, Vec<SourceLanguage>> = BTreeMap::new();
    for lang in SourceLanguage::ALL {
        for demo in sources.list_demos(lang) {
            table.entry(demo).or_default().push(lang);
        }
    }

    if table.is_empty() {
        eprintln!("No demos found under {}", sources.root().display());
        return ExitCode::from(EXIT_ERROR);
    }

    let width = table.keys().map(String::len).max().unwrap_or(0);
    for (demo, langs) in &table {
        let langs: Vec<String> = langs.iter().map(ToString::to_string).collect();
        println!("{:<width$}  {}", demo, langs.join(" "), width = width);
    }

    ExitCode::from(EXIT_SUCCESS)
}
