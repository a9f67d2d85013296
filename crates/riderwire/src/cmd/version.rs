use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("riderwire {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: riderwire");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("RIDERWIRE_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "rustc: {}",
        option_env!("RIDERWIRE_RUSTC_VERSION").unwrap_or("unknown")
    );
    println!("git_hash: {}", option_env!("RIDERWIRE_GIT_HASH").unwrap_or("unknown"));
    println!(
        "catalog: {} type codes",
        riderwire::frame::catalog::entries().len()
    );
    println!("features: serde={}, cli=true", cfg!(feature = "serde"));

    Ok(SUCCESS)
}
