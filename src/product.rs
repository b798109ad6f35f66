use std::fmt;

/// Category every product without a usable category string ends up in.
pub const NO_CATEGORY: &str = "NA";

/// Placeholder printed for empty optional fields.
const NOT_AVAILABLE: &str = "N/A";

const CATEGORY_DELIMITER: char = '|';
const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// One catalog record. Built once during ingestion and never changed after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    uniq_id: String,
    name: String,
    manufacturer: String,
    price: String,
    number_of_reviews: String,
    number_of_answered_questions: String,
    average_review_rating: String,
    raw_categories: String,
    categories: Vec<String>,
}

impl Product {
    pub fn new(
        uniq_id: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        price: impl Into<String>,
        raw_categories: impl Into<String>,
    ) -> Self {
        let raw_categories = raw_categories.into();
        Self {
            uniq_id: uniq_id.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            price: price.into(),
            number_of_reviews: String::new(),
            number_of_answered_questions: String::new(),
            average_review_rating: String::new(),
            categories: parse_categories(&raw_categories),
            raw_categories,
        }
    }

    /// Attaches the review statistics, which the CSV export does not carry.
    pub fn with_reviews(
        mut self,
        number_of_reviews: impl Into<String>,
        number_of_answered_questions: impl Into<String>,
        average_review_rating: impl Into<String>,
    ) -> Self {
        self.number_of_reviews = number_of_reviews.into();
        self.number_of_answered_questions = number_of_answered_questions.into();
        self.average_review_rating = average_review_rating.into();
        self
    }

    pub fn uniq_id(&self) -> &str {
        &self.uniq_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Display string as found in the source, e.g. `$19.99`.
    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn number_of_reviews(&self) -> &str {
        &self.number_of_reviews
    }

    pub fn number_of_answered_questions(&self) -> &str {
        &self.number_of_answered_questions
    }

    pub fn average_review_rating(&self) -> &str {
        &self.average_review_rating
    }

    pub fn raw_categories(&self) -> &str {
        &self.raw_categories
    }

    /// Never empty, see [`parse_categories`].
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Splits a raw `a | b | c` category string into trimmed labels.
///
/// Empty pieces are dropped. If nothing is left the product is filed
/// under [`NO_CATEGORY`] alone.
pub fn parse_categories(raw: &str) -> Vec<String> {
    let categories: Vec<String> = raw
        .split(CATEGORY_DELIMITER)
        .map(|piece| piece.trim_matches(WHITESPACE))
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect();

    if categories.is_empty() {
        vec![NO_CATEGORY.to_string()]
    } else {
        categories
    }
}

fn or_placeholder<'a>(field: &'a str, placeholder: &'a str) -> &'a str {
    if field.is_empty() { placeholder } else { field }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UNIQUE I.D.: {}", self.uniq_id)?;
        writeln!(f, "PRODUCT NAME: {}", self.name)?;
        writeln!(f, "MANUFACTURER: {}", or_placeholder(&self.manufacturer, NOT_AVAILABLE))?;
        writeln!(f, "PRICE: {}", or_placeholder(&self.price, NOT_AVAILABLE))?;
        writeln!(
            f,
            "NUMBER OF REVIEWS: {}",
            or_placeholder(&self.number_of_reviews, NOT_AVAILABLE)
        )?;
        writeln!(
            f,
            "NUMBER OF ANSWERED QUESTIONS: {}",
            or_placeholder(&self.number_of_answered_questions, NOT_AVAILABLE)
        )?;
        writeln!(
            f,
            "AVERAGE REVIEW RATING: {}",
            or_placeholder(&self.average_review_rating, NOT_AVAILABLE)
        )?;
        writeln!(f, "CATEGORIES: {}", or_placeholder(&self.raw_categories, NO_CATEGORY))
    }
}
