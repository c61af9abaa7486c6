use crate::palette::page::Item;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Ranks `items` against `query`, returning indices of matches ordered by
/// score (ties keep the original item order). An empty query matches
/// everything in order. Matching itself is delegated to the fuzzy matcher;
/// the palette only supplies titles and keywords.
#[must_use]
pub fn rank_items(items: &[Item], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, usize)> = items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| best_score(&matcher, item, query).map(|score| (score, idx)))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, idx)| idx).collect()
}

fn best_score(matcher: &SkimMatcherV2, item: &Item, query: &str) -> Option<i64> {
    let title = matcher.fuzzy_match(&item.title, query);
    let keyword = item
        .keywords
        .iter()
        .filter_map(|kw| matcher.fuzzy_match(kw, query))
        .max();
    match (title, keyword) {
        (Some(t), Some(k)) => Some(t.max(k)),
        (score @ Some(_), None) | (None, score @ Some(_)) => score,
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Route;
    use crate::domain::models::TeamId;
    use crate::palette::page::{Effect, Icon, Item};

    fn item(title: &str, keywords: &[&str]) -> Item {
        Item::run(
            title.to_lowercase(),
            title,
            Icon::Goto,
            Effect::Navigate(Route::team(&TeamId("t1".to_string()))),
        )
        .with_keywords(keywords.iter().map(|s| s.to_string()))
    }

    #[test]
    fn empty_query_keeps_every_item_in_order() {
        let items = vec![item("Settings", &[]), item("Team", &[])];
        assert_eq!(rank_items(&items, ""), vec![0, 1]);
    }

    #[test]
    fn non_matching_items_are_dropped() {
        let items = vec![item("Settings", &[]), item("Team", &[])];
        assert_eq!(rank_items(&items, "sett"), vec![0]);
    }

    #[test]
    fn keywords_count_as_matches() {
        let items = vec![item("Preferences", &["theme"]), item("Team", &[])];
        assert_eq!(rank_items(&items, "theme"), vec![0]);
    }

    #[test]
    fn exact_title_outranks_loose_match() {
        let items = vec![item("Template", &[]), item("Team", &[])];
        let ranked = rank_items(&items, "team");
        assert_eq!(ranked.first(), Some(&1));
    }
}
