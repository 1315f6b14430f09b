use crate::domain::engine::Engine;

/// Everything one run searches for. Immutable once the prompts are answered.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTarget {
    pub domain: String,
    pub limit: usize,
    pub engines: Vec<Engine>,
}

/// Basic shape check only: non-empty, contains a dot, at least 4 chars.
/// No case-folding, IDNA, or trailing-dot normalization.
pub fn validate_domain(input: &str) -> Option<String> {
    let domain = input.trim();
    if domain.is_empty() || !domain.contains('.') || domain.len() < 4 {
        return None;
    }
    Some(domain.to_string())
}

/// Parse the engine-selection prompt: "5" means all engines, otherwise a
/// comma-separated subset of 1..4. Engines come back in fixed menu order,
/// each at most once. Empty or invalid input yields `None`.
pub fn parse_engine_selection(input: &str) -> Option<Vec<Engine>> {
    let choice = input.trim();
    if choice.is_empty() {
        return None;
    }
    if choice == "5" {
        return Some(Engine::ALL.to_vec());
    }

    let picks: Vec<&str> = choice.split(',').map(str::trim).collect();
    if !picks
        .iter()
        .all(|c| matches!(*c, "1" | "2" | "3" | "4"))
    {
        return None;
    }

    Some(
        Engine::ALL
            .into_iter()
            .filter(|engine| picks.contains(&engine.menu_key()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::{parse_engine_selection, validate_domain};
    use crate::domain::engine::Engine;

    #[test]
    fn five_selects_all_engines() {
        assert_eq!(
            parse_engine_selection("5"),
            Some(Engine::ALL.to_vec())
        );
    }

    #[test]
    fn subset_comes_back_in_menu_order() {
        assert_eq!(
            parse_engine_selection("3,1"),
            Some(vec![Engine::Google, Engine::Baidu])
        );
    }

    #[test]
    fn whitespace_around_picks_is_tolerated() {
        assert_eq!(
            parse_engine_selection(" 1, 4 "),
            Some(vec![Engine::Google, Engine::DuckDuckGo])
        );
    }

    #[test]
    fn repeated_pick_selects_the_engine_once() {
        assert_eq!(
            parse_engine_selection("2,2"),
            Some(vec![Engine::Bing])
        );
    }

    #[test]
    fn invalid_picks_are_rejected() {
        assert_eq!(parse_engine_selection(""), None);
        assert_eq!(parse_engine_selection("6"), None);
        assert_eq!(parse_engine_selection("1,6"), None);
        assert_eq!(parse_engine_selection("google"), None);
    }

    #[test]
    fn domain_shape_check() {
        assert_eq!(
            validate_domain(" example.com \n"),
            Some("example.com".to_string())
        );
        assert_eq!(validate_domain(""), None);
        assert_eq!(validate_domain("   "), None);
        assert_eq!(validate_domain("nodots"), None);
        assert_eq!(validate_domain("a.b"), None);
    }
}
