/// Age range used as a derived grouping column on the Insights dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBucket {
    Twenties,
    Thirties,
    Forties,
    Senior,
}

impl AgeBucket {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::Twenties => "twenties",
            AgeBucket::Thirties => "thirties",
            AgeBucket::Forties => "forties",
            AgeBucket::Senior => "senior",
        }
    }
}

/// Bucket an age. Total over all integers: below 30 is "twenties" (including
/// minors in the source data), 50 and above is "senior".
pub fn age_bucket(age: i64) -> AgeBucket {
    if age < 30 {
        AgeBucket::Twenties
    } else if age < 40 {
        AgeBucket::Thirties
    } else if age < 50 {
        AgeBucket::Forties
    } else {
        AgeBucket::Senior
    }
}
