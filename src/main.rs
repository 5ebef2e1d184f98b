use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, command};
use graphml2keml::{
    diagnostics::Diagnostics,
    document::{EdgeDocument, load_document},
    file_utils, outputs,
};
use std::fs::File;
use std::io::{BufWriter, Write};

const OUTPUT_EXTENSION: &str = "edges.yaml";

fn main() -> Result<()> {
    env_logger::init();

    let matches = command!()
        .arg(
            Arg::new("INPUT")
                .help("Sets the input GraphML file(s) to use.")
                .num_args(1..)
                .required(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("CHECK_ONLY")
                .help("Only check the input file(s), but do not output the result.")
                .short('c')
                .long("check")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("OUTPUT_DIRECTORY")
                .help("Writes one .edges.yaml file per input into this directory instead of stdout.")
                .short('o')
                .long("output-dir")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("STATISTICS")
                .help("Prints statistics about the classified edges instead of the edges.")
                .short('s')
                .long("statistics")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut diags = Diagnostics::default();
    let documents = read_inputs(&mut diags, &matches);

    for msg in &diags.messages {
        eprintln!("{msg}");
    }
    let documents = documents?;

    if !matches.get_flag("CHECK_ONLY") {
        output(&matches, &documents)?;
    }

    if !diags.has_errors() {
        if diags.warnings > 0 {
            eprintln!("Warning: {} warnings detected.", diags.warnings);
        }
        Ok(())
    } else {
        Err(anyhow!(
            "{} errors and {} warnings detected.",
            diags.errors,
            diags.warnings
        ))
    }
}

///
/// Read and load all input files.
///
fn read_inputs(diags: &mut Diagnostics, matches: &ArgMatches) -> Result<Vec<EdgeDocument>> {
    let inputs = matches
        .get_many::<String>("INPUT")
        .into_iter()
        .flatten();
    let mut documents = Vec::new();
    for input in inputs {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to open file {input}"))?;
        documents.push(load_document(diags, input, &text)?);
    }
    Ok(documents)
}

///
/// Write statistics or edges, either to stdout or into the output directory.
///
fn output(matches: &ArgMatches, documents: &[EdgeDocument]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if matches.get_flag("STATISTICS") {
        outputs::render_statistics(&mut stdout, documents)?;
    } else if let Some(output_dir) = matches.get_one::<String>("OUTPUT_DIRECTORY") {
        for document in documents {
            let path =
                file_utils::translate_to_output_path(output_dir, &document.name, OUTPUT_EXTENSION)?;
            file_utils::create_parent_dirs(&path)?;
            let mut file = BufWriter::new(
                File::create(&path)
                    .with_context(|| format!("Failed to open output file {}", path.display()))?,
            );
            outputs::render_edges(&mut file, document)?;
            file.flush()?;
            log::info!("Wrote edges of {} to {}", document.name, path.display());
        }
    } else {
        outputs::render_documents(&mut stdout, documents)?;
    }
    Ok(())
}
