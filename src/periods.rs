//! Display-period computation for the menu sections.
//!
//! A menu week runs Sunday through Thursday. The current period covers
//! this week's span, the upcoming period the same span shifted by seven
//! days. Pure functions of a calendar date; callers pass "today".

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::MenuDocument;

const WEEKDAYS: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// The two period strings shown on the public page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Periods {
    /// This week, Sunday through Thursday.
    pub actuelle: String,
    /// Next week, same span.
    pub prochaine: String,
}

/// Computes both period strings for the week containing `today`.
pub fn compute(today: NaiveDate) -> Periods {
    let sunday = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    let next_sunday = sunday + Duration::days(7);

    Periods {
        actuelle: format_span(sunday),
        prochaine: format_span(next_sunday),
    }
}

/// Overwrites the `periode` fields of the current and upcoming sections.
/// The archives section has no period.
pub fn stamp(doc: &mut MenuDocument, today: NaiveDate) {
    let periods = compute(today);
    doc.menus.actif.periode = periods.actuelle;
    doc.menus.a_venir.periode = periods.prochaine;
}

/// "Du {jour} {n} au {jour} {n} {mois}" for a Sunday..Thursday span.
/// The month name is the Thursday's, which matters when the span crosses
/// a month boundary.
fn format_span(sunday: NaiveDate) -> String {
    let thursday = sunday + Duration::days(4);
    format!(
        "Du {} {} au {} {} {}",
        weekday_name(sunday),
        sunday.day(),
        weekday_name(thursday),
        thursday.day(),
        month_name(thursday),
    )
}

fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}
