use crate::dom;
use crate::timeline::{CalendarDate, MilestoneStatus};
use web_sys as web;

fn local_calendar_date(date: &js_sys::Date) -> Option<CalendarDate> {
    if date.get_time().is_nan() {
        return None;
    }
    CalendarDate::new(
        date.get_full_year() as i32,
        date.get_month() + 1,
        date.get_date(),
    )
}

fn parse_milestone(value: &str) -> Option<CalendarDate> {
    CalendarDate::parse_iso(value)
        .or_else(|| local_calendar_date(&js_sys::Date::new(&value.into())))
}

/// Label each `.timeline-item[data-date]` as done, live or upcoming
/// relative to today.
pub fn apply_timeline_status(document: &web::Document) {
    let items = dom::query_all_in_document::<web::Element>(document, ".timeline-item");
    if items.is_empty() {
        return;
    }
    let Some(today) = local_calendar_date(&js_sys::Date::new_0()) else {
        return;
    };

    for item in &items {
        let Some(raw) = item.get_attribute("data-date") else {
            continue;
        };
        let Some(milestone) = parse_milestone(&raw) else {
            log::warn!("[timeline] unparseable date {:?}", raw);
            continue;
        };
        let status = MilestoneStatus::for_dates(today, milestone);
        _ = item.class_list().add_1(status.class_name());
        if let Some(tag) = dom::query::<web::Element>(item, ".status-tag") {
            tag.set_text_content(Some(status.label()));
        }
    }
}
