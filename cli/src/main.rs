use bandtree::*;
use bandtree_core::{bfs_search, build_musician_graph, build_release_index};
use clap::Parser;
use std::time::Instant;

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn std::error::Error>> {
    let app = BandtreeApp::new(args.data_path.clone(), args.refresh)?;
    let snapshot = app.load_snapshot()?;

    let name_lookup = build_name_lookup(&snapshot);
    let from_id = find_musician_id(&args.musician1, &name_lookup)?;
    let to_id = find_musician_id(&args.musician2, &name_lookup)?;

    let musicians_by_id = snapshot.musicians_by_id();
    let releases_by_id = snapshot.releases_by_id();

    let request = SearchRequest {
        from_name: musicians_by_id[&from_id].name.clone(),
        to_name: musicians_by_id[&to_id].name.clone(),
        from_id,
        to_id,
        args,
    };

    display_search_info(&request, colors);

    let graph = build_musician_graph(&snapshot.releases);
    let release_index = build_release_index(&snapshot.releases);

    let search_timer = Instant::now();
    let (path, musicians_visited) = bfs_search(&graph, &request.from_id, &request.to_id);
    let outcome = SearchOutcome {
        path,
        musicians_visited,
        search_duration: search_timer.elapsed().as_secs_f64(),
    };

    display_search_results(
        &request,
        outcome,
        &musicians_by_id,
        &release_index,
        &releases_by_id,
        colors,
    );

    Ok(())
}
