use crate::data_classifier::Category;

/// Built-in sample strings per category, in report order
pub static SAMPLES: &[(Category, &[&str])] = &[
    (
        Category::Emails,
        &[
            "user@example.com",
            "firstname.lastname@company.co.uk",
            "invalid_email@.com",
        ],
    ),
    (
        Category::Urls,
        &[
            "https://www.example.com",
            "http://subdomain.example.org/page",
            "ftp://not-valid.com",
        ],
    ),
    (
        Category::PhoneNumbers,
        &["(123) 456-7890", "123-456-7890", "123.456.7890", "1234567890"],
    ),
    (
        Category::CreditCards,
        &["1234 5678 9012 3456", "1234-5678-9012-3456", "1234567890123456"],
    ),
    (Category::Times, &["14:30", "2:30 PM", "25:00", "02:60 AM"]),
];

pub fn samples_for(category: Category) -> Option<&'static [&'static str]> {
    SAMPLES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, samples)| *samples)
}
