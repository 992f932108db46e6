use strum::IntoEnumIterator;

use super::{classify, validate, validate_by_name, Category, ValidationError};

#[test]
fn test_patterns_compile() {
    for category in Category::iter() {
        assert!(!category.pattern().as_str().is_empty());
    }
}

#[test]
fn test_category_names() {
    let names: Vec<&str> = Category::iter().map(|c| c.into()).collect();
    assert_eq!(names, vec!["emails", "urls", "phone_numbers", "credit_cards", "times"]);
    assert_eq!(Category::from_name("credit_cards"), Ok(Category::CreditCards));
    assert_eq!(Category::PhoneNumbers.to_string(), "phone_numbers");
}

#[test]
fn test_unknown_category() {
    let err = Category::from_name("ssn").unwrap_err();
    assert_eq!(err, ValidationError::UnknownCategory("ssn".to_string()));
    assert_eq!(err.to_string(), "unknown category: ssn");

    // names are exact, not case-folded
    assert!(Category::from_name("Emails").is_err());
    assert!(validate_by_name("", "user@example.com").is_err());
}

#[test]
fn test_validate_by_name() {
    assert_eq!(validate_by_name("emails", "user@example.com"), Ok(true));
    assert_eq!(validate_by_name("times", "25:00"), Ok(false));
}

#[test]
fn test_email() {
    assert!(validate(Category::Emails, "user@example.com"));
    assert!(validate(Category::Emails, "firstname.lastname@company.co.uk"));
    assert!(validate(Category::Emails, "a+tag@my-host.io"));
    assert!(validate(Category::Emails, "first_last-x@example.org"));
    // trailing letters just lengthen the suffix
    assert!(validate(Category::Emails, "user@example.comx"));

    assert!(!validate(Category::Emails, "invalid_email@.com"));
    assert!(!validate(Category::Emails, "user@example"));
    assert!(!validate(Category::Emails, "user@example.c"));
    assert!(!validate(Category::Emails, "user.@example.com"));
    assert!(!validate(Category::Emails, ".user@example.com"));
    assert!(!validate(Category::Emails, "user@example.c0m"));
    assert!(!validate(Category::Emails, "usér@example.com"));
}

#[test]
fn test_url() {
    assert!(validate(Category::Urls, "https://www.example.com"));
    assert!(validate(Category::Urls, "http://subdomain.example.org/page"));
    assert!(validate(Category::Urls, "https://example.com/"));
    assert!(validate(Category::Urls, "https://api.example.com/v1/search?q=rust&page=2%20"));
    assert!(validate(Category::Urls, "http://my_host.example.com/a/b.html"));

    assert!(!validate(Category::Urls, "ftp://not-valid.com"));
    assert!(!validate(Category::Urls, "HTTPS://example.com"));
    assert!(!validate(Category::Urls, "http://localhost"));
    assert!(!validate(Category::Urls, "https://example.com."));
    assert!(!validate(Category::Urls, "https://example.com:8080"));
    assert!(!validate(Category::Urls, "https://example.com/path#frag"));
}

#[test]
fn test_phone() {
    assert!(validate(Category::PhoneNumbers, "(123) 456-7890"));
    assert!(validate(Category::PhoneNumbers, "123-456-7890"));
    assert!(validate(Category::PhoneNumbers, "123.456.7890"));
    assert!(validate(Category::PhoneNumbers, "1234567890"));
    assert!(validate(Category::PhoneNumbers, "(123)456-7890"));
    assert!(validate(Category::PhoneNumbers, "123 456.7890"));
    assert!(validate(Category::PhoneNumbers, "123\t4567890"));

    assert!(!validate(Category::PhoneNumbers, "(123 456-7890"));
    assert!(!validate(Category::PhoneNumbers, "123--456-7890"));
    assert!(!validate(Category::PhoneNumbers, "12345678901"));
    assert!(!validate(Category::PhoneNumbers, "123-456-789"));
    assert!(!validate(Category::PhoneNumbers, "+1 123-456-7890"));
    // non-ASCII digits are not digits here
    assert!(!validate(Category::PhoneNumbers, "١٢٣-456-7890"));
}

#[test]
fn test_credit_card() {
    assert!(validate(Category::CreditCards, "1234 5678 9012 3456"));
    assert!(validate(Category::CreditCards, "1234-5678-9012-3456"));
    assert!(validate(Category::CreditCards, "1234567890123456"));
    assert!(validate(Category::CreditCards, "1234 5678-90123456"));

    assert!(!validate(Category::CreditCards, "1234-5678-9012-3456-"));
    assert!(!validate(Category::CreditCards, "1234  5678 9012 3456"));
    assert!(!validate(Category::CreditCards, "1234.5678.9012.3456"));
    assert!(!validate(Category::CreditCards, "123456789012345"));
    assert!(!validate(Category::CreditCards, "12345678901234567"));
}

#[test]
fn test_time() {
    assert!(validate(Category::Times, "14:30"));
    assert!(validate(Category::Times, "00:00"));
    assert!(validate(Category::Times, "23:59"));
    assert!(validate(Category::Times, "2:30 PM"));
    assert!(validate(Category::Times, "2:30 pm"));
    assert!(validate(Category::Times, "02:30Am"));
    assert!(validate(Category::Times, "12:00am"));

    assert!(!validate(Category::Times, "25:00"));
    assert!(!validate(Category::Times, "02:60 AM"));
    assert!(!validate(Category::Times, "24:00"));
    assert!(!validate(Category::Times, "2:30"));
    assert!(!validate(Category::Times, "13:00 PM"));
    assert!(!validate(Category::Times, "00:00 AM"));
    assert!(!validate(Category::Times, "2:30  PM"));
    assert!(!validate(Category::Times, "2:30 P.M."));
}

#[test]
fn test_whole_string_anchoring() {
    let accepted = [
        (Category::Emails, "user@example.com"),
        (Category::Urls, "https://www.example.com"),
        (Category::PhoneNumbers, "123-456-7890"),
        (Category::CreditCards, "1234 5678 9012 3456"),
        (Category::Times, "14:30"),
    ];
    for (category, text) in accepted {
        assert!(validate(category, text), "{} should accept {:?}", category, text);
        for extra in [" ", "\n", "#", "!"] {
            let prefixed = format!("{}{}", extra, text);
            let suffixed = format!("{}{}", text, extra);
            assert!(!validate(category, &prefixed), "{} accepted {:?}", category, prefixed);
            assert!(!validate(category, &suffixed), "{} accepted {:?}", category, suffixed);
        }
    }
}

#[test]
fn test_empty_and_odd_inputs() {
    for category in Category::iter() {
        assert!(!validate(category, ""));
        assert!(!validate(category, "\u{0}"));
        assert!(!validate(category, &"9".repeat(10_000)));
    }
}

#[test]
fn test_idempotent() {
    for category in Category::iter() {
        for text in ["user@example.com", "1234567890", "2:30 pm", "nonsense"] {
            let first = validate(category, text);
            for _ in 0..5 {
                assert_eq!(validate(category, text), first);
            }
        }
    }
}

#[test]
fn test_classify() {
    assert_eq!(classify("user@example.com"), vec![Category::Emails]);
    assert_eq!(classify("14:30"), vec![Category::Times]);
    assert!(classify("hello world").is_empty());
    // ten digits with no separators look like a phone number and nothing else
    assert_eq!(classify("1234567890"), vec![Category::PhoneNumbers]);
}

#[test]
fn test_concurrent_validation() {
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(validate(Category::CreditCards, "1234-5678-9012-3456"));
                    assert!(!validate(Category::Urls, "ftp://not-valid.com"));
                }
            });
        }
    });
}
