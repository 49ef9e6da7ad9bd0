//! Labeled examples and extraction patterns, grouped by field category.

use regex::Regex;

use crate::error::PatternError;

/// Field categories recognized by the pipeline.
///
/// The set is closed and established at startup; the library only ever
/// appends within it. Declaration order is also the classifier's training
/// order, which is what posterior ties resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Amount,
    Date,
    Merchant,
    Product,
    Service,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Amount,
        Category::Date,
        Category::Merchant,
        Category::Product,
        Category::Service,
    ];

    /// Registry name used by the mutation operations.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Amount => "amounts",
            Category::Date => "dates",
            Category::Merchant => "merchants",
            Category::Product => "products",
            Category::Service => "services",
        }
    }

    /// Look up a category by registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "amounts" => Some(Category::Amount),
            "dates" => Some(Category::Date),
            "merchants" => Some(Category::Merchant),
            "products" => Some(Category::Product),
            "services" => Some(Category::Service),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One category's labeled examples and ordered extraction patterns.
#[derive(Debug)]
struct CategoryEntry {
    category: Category,
    examples: Vec<String>,
    patterns: Vec<Regex>,
}

/// Registry of labeled example phrases and ordered extraction patterns.
///
/// Examples feed the classifier; patterns drive direct field capture.
/// Both are append-only: patterns and examples can be added to an
/// existing category but never removed, and the category set itself is
/// fixed.
#[derive(Debug)]
pub struct PatternLibrary {
    // One entry per `Category::ALL` variant, in declaration order.
    entries: Vec<CategoryEntry>,
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

impl PatternLibrary {
    /// Library seeded with the built-in Peruvian receipt categories.
    pub fn builtin() -> Self {
        let entries = vec![
            CategoryEntry {
                category: Category::Amount,
                examples: [
                    "total a pagar",
                    "S/",
                    "importe total",
                    "monto final",
                    "subtotal",
                    "total sin igv",
                ]
                .map(String::from)
                .to_vec(),
                // Labeled totals in priority order; the amount extractor
                // walks these first-match-wins.
                patterns: vec![
                    re(r"(?i)TOTAL\s*S/\s*(\d+[.,]\d{2})"),
                    re(r"(?i)TOTAL\s*PEN\s*(\d+[.,]\d{2})"),
                    re(r"(?i)IMPORTE\s*S/\s*(\d+[.,]\d{2})"),
                    re(r"(?i)MONTO\s*S/\s*(\d+[.,]\d{2})"),
                ],
            },
            CategoryEntry {
                category: Category::Date,
                examples: [
                    "fecha de emisión",
                    "emitido el",
                    "fecha del comprobante",
                    "21 ene. 2025",
                ]
                .map(String::from)
                .to_vec(),
                patterns: vec![
                    re(r"(?i)FECHA:\s*(\d{2})([A-Za-z]{3})(\d{2})"),
                    re(r"(\d{2})[-/](\d{2})[-/](\d{2,4})"),
                    re(r"(\d{2})([A-Za-z]{3})(\d{2,4})"),
                    re(r"(?i)(\d{1,2})\s*([A-Za-z]{3})\.?\s*(\d{2,4})"),
                ],
            },
            CategoryEntry {
                category: Category::Merchant,
                examples: [
                    "Ely F. Leguia O.",
                    "razón social",
                    "denominación",
                    "nombre comercial",
                    "destino",
                ]
                .map(String::from)
                .to_vec(),
                patterns: vec![
                    re(r"(?i)Destino:?\s*([^\n]+)"),
                    re(r"(?i)RAZ[OÓ]N\s+SOCIAL:?\s*([^\n]+)"),
                    re(r"(?i)DENOMINACI[OÓ]N:?\s*([^\n]+)"),
                ],
            },
            CategoryEntry {
                category: Category::Product,
                examples: [
                    "descripción del producto",
                    "cantidad",
                    "precio unitario",
                    "producto",
                    "N° de operación: 06144082",
                ]
                .map(String::from)
                .to_vec(),
                patterns: vec![
                    re(r"(?i)(\d+)\s*x\s*(\d+[.,]\d{2})"),
                    re(r"(?i)UNIT\.\s*(\d+[.,]\d{2})"),
                    re(r"(?i)N°\s*de\s*operaci[oó]n:?\s*(\d+)"),
                ],
            },
            CategoryEntry {
                category: Category::Service,
                examples: [
                    "servicio",
                    "pago de servicio",
                    "consumo",
                    "recarga",
                ]
                .map(String::from)
                .to_vec(),
                patterns: Vec::new(),
            },
        ];

        Self { entries }
    }

    fn entry(&self, category: Category) -> &CategoryEntry {
        &self.entries[category as usize]
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut CategoryEntry, PatternError> {
        let category = Category::from_name(name)
            .ok_or_else(|| PatternError::UnknownCategory(name.to_string()))?;
        Ok(&mut self.entries[category as usize])
    }

    /// Ordered extraction patterns for one category.
    pub fn patterns_for(&self, category: Category) -> &[Regex] {
        &self.entry(category).patterns
    }

    /// Every category with its ordered patterns.
    pub fn all_patterns(&self) -> impl Iterator<Item = (Category, &[Regex])> + '_ {
        self.entries
            .iter()
            .map(|e| (e.category, e.patterns.as_slice()))
    }

    /// Labeled example phrases for one category.
    pub fn examples_for(&self, category: Category) -> &[String] {
        &self.entry(category).examples
    }

    /// Every (example, category) pair in category-declaration order.
    pub fn examples(&self) -> impl Iterator<Item = (&str, Category)> + '_ {
        self.entries
            .iter()
            .flat_map(|e| e.examples.iter().map(move |x| (x.as_str(), e.category)))
    }

    /// Append a labeled example to a category.
    pub fn add_example(
        &mut self,
        category: &str,
        text: impl Into<String>,
    ) -> Result<(), PatternError> {
        self.entry_mut(category)?.examples.push(text.into());
        Ok(())
    }

    /// Append an extraction pattern to a category. The pattern is tried
    /// after every pattern already registered for that category.
    pub fn add_pattern(&mut self, category: &str, pattern: Regex) -> Result<(), PatternError> {
        self.entry_mut(category)?.patterns.push(pattern);
        Ok(())
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
