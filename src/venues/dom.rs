use scraper::{ElementRef, Selector};

/// Text of the first descendant matching the selector, whitespace-trimmed;
/// empty when the venue page omits the element.
pub fn select_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Attribute of the first descendant matching the selector.
pub fn select_attr(element: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|node| node.value().attr(attr))
        .map(str::to_string)
}
