use bandtree_core::Release;

pub fn format_number(n: usize) -> String {
    let reversed: Vec<char> = n.to_string().chars().rev().collect();
    let mut formatted = String::new();

    for (index, digit) in reversed.iter().enumerate() {
        if index > 0 && index % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*digit);
    }

    formatted.chars().rev().collect()
}

pub fn format_release_label(release: &Release) -> String {
    match release.year {
        Some(year) => format!("{} ({})", release.title, year),
        None => release.title.clone(),
    }
}
