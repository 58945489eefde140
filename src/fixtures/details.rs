// fixtures/details.rs
//
// Content of the business detail view. None of it is derived from the
// Business record: every business shows the same reviews, hours and contact
// block.

use crate::web_app::model::{ContactInfo, OpeningHours, SampleReview};

pub fn sample_reviews() -> Vec<SampleReview> {
    [
        (
            1,
            "Sarah Johnson",
            5,
            "2024-01-15",
            "Amazing experience! The quality of service exceeded my expectations. Highly recommend to anyone looking for professional and reliable service.",
        ),
        (
            2,
            "Mike Chen",
            4,
            "2024-01-10",
            "Great place with friendly staff. The atmosphere is welcoming and the service is quick. Will definitely come back again.",
        ),
        (
            3,
            "Emily Davis",
            5,
            "2024-01-08",
            "Outstanding! Everything was perfect from start to finish. The attention to detail is remarkable.",
        ),
    ]
    .into_iter()
    .map(|(id, author, rating, date, text)| SampleReview {
        id,
        author: author.to_string(),
        rating,
        date: date.to_string(),
        text: text.to_string(),
    })
    .collect()
}

pub fn business_hours() -> Vec<OpeningHours> {
    [
        ("Monday", "9:00 AM - 6:00 PM"),
        ("Tuesday", "9:00 AM - 6:00 PM"),
        ("Wednesday", "9:00 AM - 6:00 PM"),
        ("Thursday", "9:00 AM - 6:00 PM"),
        ("Friday", "9:00 AM - 8:00 PM"),
        ("Saturday", "10:00 AM - 6:00 PM"),
        ("Sunday", "Closed"),
    ]
    .into_iter()
    .map(|(day, hours)| OpeningHours {
        day: day.to_string(),
        hours: hours.to_string(),
    })
    .collect()
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        phone: "(555) 123-4567".to_string(),
        website: "www.example.com".to_string(),
    }
}

pub fn popular_services() -> [&'static str; 4] {
    ["Professional Service", "Quality Products", "Expert Consultation", "Customer Support"]
}
