//! Print structural reports for a few modular groups.
//!
//! Set `RUST_LOG=modgroup=debug` to see the library's tracing output.

use modgroup::report::ReportConfig;
use modgroup::subgroup::generate;
use modgroup::{get_group, GroupReport};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() {
    init_tracing();

    println!("modgroup - Group Report Example\n");

    for name in ["Z5", "U(8)", "U(7)"] {
        let group = get_group(name).expect("known notation");
        match GroupReport::new(&group) {
            Ok(report) => println!("{report}"),
            Err(e) => println!("✗ {name}: {e}"),
        }
        println!("{}", "=".repeat(40));
    }

    // Large groups: skip the Cayley table and the per-element list.
    let lean = ReportConfig::new()
        .include_table(false)
        .include_all_subgroups(false);
    let u100 = get_group("U100").expect("known notation");
    let report = GroupReport::with_config(&u100, &lean).expect("report");
    println!("{report}");

    // Errors are reported, not rendered.
    let z5 = get_group("Z5").expect("known notation");
    if let Err(e) = generate(6, &z5) {
        println!("✗ {e}");
    }
}
