use riderwire::frame::catalog::{entries, lookup};

use crate::cmd::CatalogArgs;
use crate::exit::{CliError, CliResult, FAILURE, SUCCESS};
use crate::output::{print_catalog, OutputFormat};

pub fn run(args: CatalogArgs, format: OutputFormat) -> CliResult<i32> {
    let selected: Vec<_> = match args.data_type {
        Some(data_type) => {
            let entry = lookup(data_type).ok_or_else(|| {
                CliError::new(FAILURE, format!("no handler for data type {data_type}"))
            })?;
            vec![entry]
        }
        None => entries().iter().collect(),
    };

    print_catalog(&selected, format);
    Ok(SUCCESS)
}
