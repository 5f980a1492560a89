use plotsave_dataset::Rfc3339Time;
use plotsave_dataset::Snapshot;
use plotsave_dataset::TimeFormat;
use plotsave_encode::Exporter;
use plotsave_encode::FieldQuoting;
use plotsave_encode::TableEncoder;
use plotsave_encode::TableOptions;
use plotsave_encode::VectorRenderer;

use crate::cli::PathExt;
use crate::cli::TableArgs;
use crate::cli::TimeFormatArg;
use crate::error::CliError;
use crate::sink::DirectorySink;

pub(crate) fn table(args: TableArgs) -> Result<(), CliError> {
    let output_path = args.output_path.clone().or_current_dir()?;

    println!(
        "plotsave exports the datasets from: `{}` as a `{}` table in: `{}`",
        args.input.display(),
        args.axis_kind,
        output_path.display()
    );

    let snapshot = Snapshot::read(&args.input)?;
    let options = TableOptions {
        delimiter: args.delimiter,
        quoting: if args.quote {
            FieldQuoting::Necessary
        } else {
            FieldQuoting::Never
        },
    };
    let encoder = TableEncoder::new(options);
    let mut sink = DirectorySink::new(output_path);

    match args.time_format {
        TimeFormatArg::Raw => export(encoder, &snapshot, &args, &mut sink)?,
        TimeFormatArg::Rfc3339 => {
            export(encoder.with_time_format(Rfc3339Time), &snapshot, &args, &mut sink)?
        }
    }

    for path in sink.written() {
        println!("saved `{}`", path.display());
    }

    Ok(())
}

fn export<T: TimeFormat>(
    encoder: TableEncoder<T>,
    snapshot: &Snapshot,
    args: &TableArgs,
    sink: &mut DirectorySink,
) -> Result<(), CliError> {
    let exporter = Exporter::new(encoder, VectorRenderer::default());
    exporter.export_table(snapshot.datasets(), args.axis_kind, sink)?;

    Ok(())
}
