use crate::args::Args;
use crate::colors::ColorScheme;
use crate::utils::{format_number, format_release_label};
use bandtree_core::{Musician, Release, ReleasePairIndex, get_connecting_releases};
use rustc_hash::FxHashMap;

const MAX_RELEASES_SHOWN: usize = 3;

pub struct SearchRequest {
    pub from_id: String,
    pub to_id: String,
    pub from_name: String,
    pub to_name: String,
    pub args: Args,
}

pub struct SearchOutcome {
    pub path: Option<Vec<String>>,
    pub musicians_visited: usize,
    pub search_duration: f64,
}

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🎵 Finding connection from {} to {}",
        colors.musician_name(&format!("\"{}\"", request.from_name)),
        colors.musician_name(&format!("\"{}\"", request.to_name))
    );
    println!("🔍 Searching...");
}

pub fn display_search_results(
    request: &SearchRequest,
    outcome: SearchOutcome,
    musicians_by_id: &FxHashMap<String, Musician>,
    release_index: &ReleasePairIndex,
    releases_by_id: &FxHashMap<String, Release>,
    colors: &ColorScheme,
) {
    println!("\n---\n");

    match outcome.path {
        Some(path) => {
            display_successful_path(
                &path,
                &request.args,
                musicians_by_id,
                release_index,
                releases_by_id,
                colors,
            );
            if request.args.verbose {
                display_search_statistics(outcome.musicians_visited, outcome.search_duration, colors);
            }
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No connection found between"),
                colors.musician_name(&format!("\"{}\"", request.from_name)),
                colors.musician_name(&format!("\"{}\"", request.to_name))
            );
            if request.args.verbose {
                display_search_statistics(outcome.musicians_visited, outcome.search_duration, colors);
            }
        }
    }
}

fn display_successful_path(
    path: &[String],
    display_options: &Args,
    musicians_by_id: &FxHashMap<String, Musician>,
    release_index: &ReleasePairIndex,
    releases_by_id: &FxHashMap<String, Release>,
    colors: &ColorScheme,
) {
    let degrees = path.len() - 1;
    let headline = match degrees {
        0 => "Same musician!".to_string(),
        1 => "Direct connection!".to_string(),
        _ => format!("{} degrees of separation", degrees),
    };
    println!("{} {}\n", colors.success("✅"), colors.success(&headline));

    // Show path flow first
    let path_flow = path
        .iter()
        .map(|musician_id| {
            colors
                .musician_name(&format!("\"{}\"", display_name(musicians_by_id, musician_id)))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    // Show detailed list only if not in quiet mode
    if !display_options.quiet {
        println!();
        for (step_index, musician_id) in path.iter().enumerate() {
            let step_number = format!("{}.", step_index + 1);
            let mut formatted_line = format!(
                "{:2} {}",
                colors.step_number(&step_number),
                colors.musician_name(&format!("\"{}\"", display_name(musicians_by_id, musician_id)))
            );

            if step_index > 0 && !display_options.hide_releases {
                let connecting =
                    get_connecting_releases(release_index, &path[step_index - 1], musician_id);
                let label = format_connecting_releases(connecting, releases_by_id, colors);
                if !label.is_empty() {
                    formatted_line.push_str(&format!("  {}", label));
                }
            }

            println!("{}", formatted_line);
        }
    }
}

fn display_name<'a>(musicians_by_id: &'a FxHashMap<String, Musician>, musician_id: &'a str) -> &'a str {
    musicians_by_id
        .get(musician_id)
        .map_or(musician_id, |musician| musician.name.as_str())
}

fn format_connecting_releases(
    release_ids: &[String],
    releases_by_id: &FxHashMap<String, Release>,
    colors: &ColorScheme,
) -> String {
    let labels: Vec<String> = release_ids
        .iter()
        .take(MAX_RELEASES_SHOWN)
        .filter_map(|release_id| releases_by_id.get(release_id))
        .map(|release| colors.release_title(&format_release_label(release)).to_string())
        .collect();

    if labels.is_empty() {
        return String::new();
    }

    let mut formatted = format!("via {}", labels.join(", "));
    if release_ids.len() > MAX_RELEASES_SHOWN {
        formatted.push_str(&format!(" +{} more", release_ids.len() - MAX_RELEASES_SHOWN));
    }
    formatted
}

fn display_search_statistics(musicians_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} musicians in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(musicians_visited)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
