use profetch_inquiry::TargetKind;
use strum::VariantArray;

/// Print the effective route table: one line per target kind with the
/// endpoint path and wire contract the client will use.
pub fn print_routes(config: &crate::config::Config) {
    println!("base url: {}", config.backend.base_url);
    for kind in TargetKind::VARIANTS {
        let route = config.backend.routes.route_for(*kind);
        println!("{:<10} POST {:<28} {}", kind, route.path, route.contract);
    }
}
