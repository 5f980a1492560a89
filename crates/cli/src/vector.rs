use plotsave_dataset::Snapshot;
use plotsave_encode::Exporter;
use plotsave_encode::TableEncoder;
use plotsave_encode::TableOptions;
use plotsave_encode::VectorRenderer;

use crate::cli::PathExt;
use crate::cli::VectorArgs;
use crate::config;
use crate::error::CliError;
use crate::sink::DirectorySink;

pub(crate) fn vector(args: VectorArgs) -> Result<(), CliError> {
    let output_path = args.output_path.clone().or_current_dir()?;

    println!(
        "plotsave renders the datasets from: `{}` as a vector graphic in: `{}`",
        args.input.display(),
        output_path.display()
    );

    let renderer = VectorRenderer::new(config::render_config(&args)?)?;
    let snapshot = Snapshot::read(&args.input)?;

    let exporter = Exporter::new(TableEncoder::new(TableOptions::default()), renderer);
    let mut sink = DirectorySink::new(output_path);
    exporter.export_vector(snapshot.datasets(), &mut sink)?;

    for path in sink.written() {
        println!("saved `{}`", path.display());
    }

    Ok(())
}
