use crate::model::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain (nullable) text column, matched as a substring.
    Text,
    /// Text array column, matches when any element contains the term.
    TextArray,
    /// Numeric column, cast to text before matching.
    Numeric,
}

enum FieldValue<'a> {
    Text(Option<&'a str>),
    TextArray(&'a [String]),
    Numeric(f64),
}

#[derive(Clone, Copy)]
pub struct SearchField {
    pub column: &'static str,
    pub kind: FieldKind,
    extract: for<'a> fn(&'a Product) -> FieldValue<'a>,
}

impl SearchField {
    /// SQL predicate for this column against a bound `ILIKE` pattern.
    pub fn sql_predicate(&self, placeholder: &str) -> String {
        let column = self.column;
        match self.kind {
            FieldKind::Text => format!("{column} ILIKE {placeholder}"),
            FieldKind::TextArray => format!(
                "EXISTS (SELECT 1 FROM unnest({column}) AS element WHERE element ILIKE {placeholder})"
            ),
            FieldKind::Numeric => format!("{column}::TEXT ILIKE {placeholder}"),
        }
    }

    fn matches(&self, product: &Product, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

        match (self.extract)(product) {
            FieldValue::Text(value) => value.is_some_and(contains),
            FieldValue::TextArray(values) => values.iter().any(|v| contains(v)),
            FieldValue::Numeric(value) => contains(&value.to_string()),
        }
    }
}

fn name(p: &Product) -> FieldValue<'_> {
    FieldValue::Text(Some(&p.name))
}

fn category(p: &Product) -> FieldValue<'_> {
    FieldValue::Text(Some(&p.category))
}

fn sub_category(p: &Product) -> FieldValue<'_> {
    FieldValue::Text(p.sub_category.as_deref())
}

fn sub_sub_category(p: &Product) -> FieldValue<'_> {
    FieldValue::Text(p.sub_sub_category.as_deref())
}

fn description(p: &Product) -> FieldValue<'_> {
    FieldValue::Text(p.description.as_deref())
}

fn color(p: &Product) -> FieldValue<'_> {
    FieldValue::Text(p.color.as_deref())
}

fn sizes(p: &Product) -> FieldValue<'_> {
    FieldValue::TextArray(&p.sizes)
}

fn price(p: &Product) -> FieldValue<'_> {
    FieldValue::Numeric(p.price)
}

pub const PRODUCT_SEARCH_FIELDS: [SearchField; 8] = [
    SearchField { column: "name", kind: FieldKind::Text, extract: name },
    SearchField { column: "category", kind: FieldKind::Text, extract: category },
    SearchField { column: "sub_category", kind: FieldKind::Text, extract: sub_category },
    SearchField { column: "sub_sub_category", kind: FieldKind::Text, extract: sub_sub_category },
    SearchField { column: "description", kind: FieldKind::Text, extract: description },
    SearchField { column: "color", kind: FieldKind::Text, extract: color },
    SearchField { column: "sizes", kind: FieldKind::TextArray, extract: sizes },
    SearchField { column: "price", kind: FieldKind::Numeric, extract: price },
];

/// A catalog text search: one case-insensitive substring term applied to every
/// field in [`PRODUCT_SEARCH_FIELDS`], OR-ed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSearch {
    term: String,
}

impl ProductSearch {
    /// `None` for an absent or empty query, meaning "list everything".
    pub fn parse(query: Option<&str>) -> Option<Self> {
        query.filter(|q| !q.is_empty()).map(|q| Self {
            term: q.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// `ILIKE` pattern with the term taken literally.
    pub fn like_pattern(&self) -> String {
        let mut escaped = String::with_capacity(self.term.len() + 2);
        escaped.push('%');
        for ch in self.term.chars() {
            if matches!(ch, '\\' | '%' | '_') {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        escaped.push('%');
        escaped
    }

    pub fn sql_predicate(placeholder: &str) -> String {
        let predicates: Vec<String> = PRODUCT_SEARCH_FIELDS
            .iter()
            .map(|field| field.sql_predicate(placeholder))
            .collect();

        format!("({})", predicates.join(" OR "))
    }

    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.term.to_lowercase();
        PRODUCT_SEARCH_FIELDS
            .iter()
            .any(|field| field.matches(product, &needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn product() -> Product {
        Product {
            product_id: Uuid::new_v4(),
            name: "Linen Shirt".into(),
            gender: "Men".into(),
            category: "Clothing".into(),
            sub_category: Some("Shirts".into()),
            sub_sub_category: None,
            description: None,
            color: Some("Navy".into()),
            sizes: vec!["S".into(), "XL".into()],
            price: 49.5,
            stock: 3,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_query_means_no_filter() {
        assert!(ProductSearch::parse(None).is_none());
        assert!(ProductSearch::parse(Some("")).is_none());
    }

    #[test]
    fn matches_each_field_kind() {
        let p = product();
        let hit = |q: &str| ProductSearch::parse(Some(q)).unwrap().matches(&p);

        assert!(hit("linen"));
        assert!(hit("CLOTH"));
        assert!(hit("navy"));
        assert!(hit("xl"));
        assert!(hit("49.5"));
        assert!(!hit("sandal"));
        assert!(!hit("women"));
    }

    #[test]
    fn whole_number_price_matches_without_fraction() {
        let mut p = product();
        p.price = 1299.0;
        let search = ProductSearch::parse(Some("1299")).unwrap();
        assert!(search.matches(&p));
        assert!(!ProductSearch::parse(Some("1299.0")).unwrap().matches(&p));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        let search = ProductSearch::parse(Some("50%_off\\")).unwrap();
        assert_eq!(search.like_pattern(), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn sql_predicate_covers_every_field() {
        let sql = ProductSearch::sql_predicate("$1");
        assert_eq!(sql.matches(" OR ").count(), PRODUCT_SEARCH_FIELDS.len() - 1);
        assert!(sql.contains("price::TEXT ILIKE $1"));
        assert!(sql.contains("unnest(sizes)"));
    }
}
