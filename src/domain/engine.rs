/// The four fixed search-engine integrations, each with its own URL template
/// and pagination scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    Google,
    Bing,
    Baidu,
    DuckDuckGo,
}

const GOOGLE_PAGE_CAP: usize = 100;
const BING_PAGE_CAP: usize = 50;
const PAGE_STEP: usize = 10;

impl Engine {
    pub const ALL: [Engine; 4] = [
        Engine::Google,
        Engine::Bing,
        Engine::Baidu,
        Engine::DuckDuckGo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Engine::Google => "Google",
            Engine::Bing => "Bing",
            Engine::Baidu => "Baidu",
            Engine::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Number shown next to the engine in the selection menu.
    pub fn menu_key(&self) -> &'static str {
        match self {
            Engine::Google => "1",
            Engine::Bing => "2",
            Engine::Baidu => "3",
            Engine::DuckDuckGo => "4",
        }
    }

    /// Result-page URLs to request for one run. `%40` is the encoded `@`,
    /// so the search term is literally `@<domain>`. Google and Bing page
    /// by offsets of 10 up to their caps; Baidu and DuckDuckGo serve a
    /// single page. `limit` bounds page offsets, not emails returned.
    pub fn page_urls(&self, domain: &str, limit: usize) -> Vec<String> {
        match self {
            Engine::Google => (0..limit.min(GOOGLE_PAGE_CAP))
                .step_by(PAGE_STEP)
                .map(|start| {
                    format!(
                        "https://www.google.com/search?q=%40{}&start={}",
                        domain, start
                    )
                })
                .collect(),
            Engine::Bing => (0..limit.min(BING_PAGE_CAP))
                .step_by(PAGE_STEP)
                .map(|first| {
                    format!("https://www.bing.com/search?q=%40{}&first={}", domain, first)
                })
                .collect(),
            Engine::Baidu => vec![format!("https://www.baidu.com/s?wd=%40{}", domain)],
            Engine::DuckDuckGo => {
                vec![format!("https://html.duckduckgo.com/html/?q=%40{}", domain)]
            }
        }
    }
}
