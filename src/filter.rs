use crate::event::EdmEvent;

/// Drops every event whose club name contains one of the denied substrings,
/// case-insensitively. Survivors keep their relative order; an empty deny
/// list keeps everything.
pub fn filter_unwanted(events: Vec<EdmEvent>, denied: &[String]) -> Vec<EdmEvent> {
    if denied.is_empty() {
        return events;
    }

    events
        .into_iter()
        .filter(|event| is_wanted(&event.club_name, denied))
        .collect()
}

fn is_wanted(club_name: &str, denied: &[String]) -> bool {
    let club_name = club_name.to_lowercase();

    !denied
        .iter()
        .any(|substring| club_name.contains(&substring.to_lowercase()))
}
