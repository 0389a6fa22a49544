//! Valid form snapshots shared by the unit tests.

use serde_json::{json, Value};

pub fn long_html() -> String {
    format!("<p>{}</p>", "Snorkel the lagoons and lunch on the beach. ".repeat(3))
}

/// The reference co-tour: every field valid, one complete FAQ entry.
pub fn tour() -> Value {
    json!({
        "title": "x".repeat(25),
        "slug": "",
        "image": "https://example.com/i.jpg",
        "tags": ["Full-Day"],
        "description": "y".repeat(60),
        "type": "co-tour",
        "duration": "4",
        "period": "Half-Day",
        "bookedCount": 0,
        "oldPrice": 100,
        "newPrice": 80,
        "childPrice": 40,
        "minimumPerson": 2,
        "maximumPerson": 10,
        "departureTimes": ["08:00"],
        "label": "None",
        "details": {
            "about": long_html(),
            "itinerary": long_html(),
            "pickupLocation": "<p>Hotel lobby</p>",
            "note": "<p>Bring sunscreen</p>",
            "faq": [{ "question": "Q", "answer": "A" }]
        }
    })
}

/// A shared van transfer with an operator-defined pickup point.
pub fn transfer() -> Value {
    json!({
        "title": "El Nido to Coron Van Transfer",
        "slug": "el-nido-coron-van",
        "image": "https://example.com/van.jpg",
        "tags": ["Transfer", "Van"],
        "description": "Door-to-door shared van with air conditioning.",
        "type": "Van",
        "from": "El Nido",
        "to": "Coron",
        "duration": "6 hours",
        "seatCapacity": 12,
        "bookedCount": "3",
        "oldPrice": "1500",
        "newPrice": "1200",
        "childPrice": 900,
        "minimumPerson": 1,
        "maximumPerson": 12,
        "departureTimes": ["06:00", "13:00"],
        "label": "Popular",
        "details": {
            "about": long_html(),
            "itinerary": long_html(),
            "note": "<p>Luggage limit 20kg</p>",
            "pickupGuidelines": "<p>Be ready 15 minutes early</p>",
            "pickupOption": "admin",
            "pickupLocation": "<p>Town terminal, El Nido</p>",
            "faq": [{ "question": "Is lunch included?", "answer": "No." }]
        }
    })
}

/// Set a dotted path on a fixture, creating objects along the way.
pub fn with(mut draft: Value, path: &str, value: Value) -> Value {
    let mut target = &mut draft;
    let mut keys = path.split('.').peekable();
    while let Some(key) = keys.next() {
        if keys.peek().is_none() {
            target[key] = value;
            break;
        }
        target = &mut target[key];
    }
    draft
}

/// Remove a dotted path from a fixture.
pub fn without(mut draft: Value, path: &str) -> Value {
    let (parent, key) = match path.rsplit_once('.') {
        Some((parent, key)) => (Some(parent), key),
        None => (None, path),
    };
    let target = match parent {
        Some(parent) => parent.split('.').fold(&mut draft, |v, k| &mut v[k]),
        None => &mut draft,
    };
    if let Some(map) = target.as_object_mut() {
        map.remove(key);
    }
    draft
}
