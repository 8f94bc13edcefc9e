//!
//! # Exposure sheet diagnostics
//!
//! Reads and writes the `.xsheet` sidecar files that store the frame list for a document.
//!

#[macro_use]
extern crate log;

use flo_xsheet::*;

use clap::{Arg, ArgMatches, Command, value_parser};

use std::process;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    // Fetch the parameters
    let params = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(concat!("Set RUST_LOG=debug to see the commands as they are performed\n",
            "\n",
            "Licensed under the Apache License, Version 2.0 (the \"License\");\n",
            "you may not use this file except in compliance with the License.\n",
            "You may obtain a copy of the License at\n",
            "\n",
            "http://www.apache.org/licenses/LICENSE-2.0\n\n"))
        .subcommand_required(true)
        .arg(Arg::new("settings")
            .long("settings")
            .short('s')
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("A JSON file containing the xsheet settings (frame_count, opacities)"))
        .arg(Arg::new("frames")
            .long("frames")
            .short('f')
            .value_parser(value_parser!(usize))
            .help("The number of frames in a new exposure sheet (overrides the settings file)"))
        .arg(Arg::new("layers")
            .long("layers")
            .short('l')
            .value_parser(value_parser!(usize))
            .help("The number of layers in the document (default: enough for every layer index in the xsheet)"))
        .subcommand(Command::new("ls")
            .about("Lists the frames stored in the xsheet for a document")
            .arg(Arg::new("DOCUMENT")
                .help("The document file (the xsheet is the file with the same name and the extension .xsheet)")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1)))
        .subcommand(Command::new("init")
            .about("Writes an empty xsheet for a document, replacing any existing one")
            .arg(Arg::new("DOCUMENT")
                .help("The document file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1)))
        .subcommand(Command::new("sidecar")
            .about("Shows where the xsheet for a document is stored")
            .arg(Arg::new("DOCUMENT")
                .help("The document file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1)))
        .subcommand(Command::new("settings")
            .about("Shows the settings that will be used, as JSON"))
        .get_matches();

    if let Err(err) = run(&params) {
        error!("{:?}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}

///
/// Runs the subcommand specified by the parameters
///
fn run(params: &ArgMatches) -> Result<(), XsheetError> {
    let settings    = settings(params)?;
    let num_layers  = params.get_one::<usize>("layers").copied();

    match params.subcommand() {
        Some(("ls", ls_params)) => {
            let document    = document_path(ls_params);
            let num_layers  = match num_layers {
                Some(num_layers)    => num_layers,
                None                => sidecar_layers_needed(&document)?
            };
            let doc         = blank_document(num_layers);
            let mut anim    = Animation::new(settings);

            if let XsheetLoad::Missing(sidecar) = anim.load_xsheet(&doc, &document)? {
                println!("No xsheet at {} (showing a new one)", sidecar.display());
            }

            list_frames(&anim, &doc);
        }

        Some(("init", init_params)) => {
            let document    = document_path(init_params);
            let doc         = blank_document(num_layers.unwrap_or(0));
            let mut anim    = Animation::new(settings);

            anim.clear_xsheet();
            let sidecar     = anim.save_xsheet(&doc, &document)?;

            println!("{}", sidecar.display());
        }

        Some(("sidecar", sidecar_params)) => {
            println!("{}", sidecar_path(document_path(sidecar_params)).display());
        }

        Some(("settings", _)) => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }

        _ => { }
    }

    Ok(())
}

///
/// Reads the settings file (if there is one) and applies the overrides from the command line
///
fn settings(params: &ArgMatches) -> Result<XsheetSettings, XsheetError> {
    let settings = match params.get_one::<PathBuf>("settings") {
        Some(path)  => XsheetSettings::from_file(path)?,
        None        => XsheetSettings::default()
    };

    Ok(match params.get_one::<usize>("frames") {
        Some(frame_count)   => settings.with_frame_count(*frame_count),
        None                => settings
    })
}

fn document_path(params: &ArgMatches) -> PathBuf {
    params.get_one::<PathBuf>("DOCUMENT").cloned().unwrap_or_default()
}

///
/// Creates a document with some empty layers, which the layer indices in an xsheet can refer to
///
fn blank_document(num_layers: usize) -> InMemoryDocument {
    let mut doc = InMemoryDocument::new(1, 1);

    for layer_num in 0..num_layers {
        doc.add_layer(&format!("Layer {}", layer_num));
    }

    doc
}

///
/// Writes out the frames in an animation, one per line
///
fn list_frames(anim: &Animation, doc: &InMemoryDocument) {
    let selected = anim.frames().sync(|frames| frames.selected_index());

    for (index, cel) in anim.get_xsheet_list() {
        let marker  = if index == selected { ">" } else { " " };
        let layer   = cel.drawing
            .and_then(|layer| doc.index_of_layer(layer))
            .map(|layer_index| format!("  [layer {}]", layer_index))
            .unwrap_or_default();

        println!("{} {}{}", marker, cel, layer);
    }
}
