//! Uniform selection from a list of strings.

use super::ValueGenerator;
use crate::error::GeneratorError;
use mogen_core::GeneratedValue;
use rand::Rng;

/// First names used when a `name` field has no `options`.
pub const DEFAULT_NAMES: &[&str] = &[
    "Liam", "Noah", "Oliver", "Elijah", "William", "James", "Benjamin", "Lucas", "Henry",
    "Alexander", "Mason", "Michael", "Ethan", "Daniel", "Jacob", "Logan", "Jackson", "Levi",
    "Sebastian", "Mateo", "Jack", "Owen", "Theodore", "Aiden", "Samuel", "Joseph", "John",
    "David", "Wyatt", "Matthew", "Luke", "Asher", "Carter", "Julian", "Grayson", "Leo", "Jayden",
    "Gabriel", "Isaac", "Lincoln", "Anthony", "Hudson", "Dylan", "Ezra", "Thomas", "Charles",
    "Christopher", "Jaxon", "Maverick", "Josiah", "Isaiah", "Andrew", "Elias", "Joshua", "Nathan",
    "Caleb", "Ryan", "Adrian", "Miles", "Eli", "Nolan", "Christian", "Aaron", "Cameron", "Ezekiel",
    "Colton", "Luca", "Landon", "Hunter", "Jonathan", "Santiago", "Axel", "Easton", "Cooper",
    "Jeremiah", "Angel", "Roman", "Connor", "Jameson", "Robert", "Greyson", "Jordan", "Ian",
    "Carson", "Jaxson", "Leonardo", "Nicholas", "Dominic", "Austin", "Everett", "Brooks", "Xavier",
    "Kai", "Jose", "Parker", "Adam", "Jace", "Wesley", "Kayden", "Silas", "Bennett", "Declan",
    "Waylon", "Weston", "Evan", "Emmett", "Micah", "Ryder", "Beau", "Damian", "Brayden", "Gael",
    "Rowan", "Harrison", "Bryson", "Sawyer", "Amir", "Kingston", "Jason", "Giovanni", "Vincent",
    "Ayden", "Chase", "Myles", "Diego", "Nathaniel", "Legend", "Jonah", "River", "Tyler", "Cole",
    "Braxton", "George", "Milo", "Zachary", "Ashton", "Luis", "Jasper", "Kaiden", "Adriel",
    "Gavin", "Bentley", "Calvin", "Zion", "Juan", "Maxwell", "Max", "Ryker", "Carlos", "Emmanuel",
    "Jayce", "Lorenzo", "Ivan", "Jude", "August", "Kevin", "Malachi", "Elliott", "Rhett", "Archer",
    "Karter", "Arthur", "Luka", "Elliot", "Thiago", "Brandon", "Camden", "Justin", "Jesus",
    "Maddox", "King", "Theo", "Enzo", "Matteo", "Emiliano", "Dean", "Hayden", "Finn", "Brody",
    "Antonio", "Abel", "Alex", "Tristan", "Graham", "Zayden", "Judah", "Xander", "Miguel", "Atlas",
    "Messiah", "Barrett", "Tucker", "Timothy", "Alan", "Edward", "Leon", "Dawson", "Eric", "Ace",
    "Victor",
];

/// Picks one of `options` uniformly at random.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGenerator {
    field: String,
    options: Vec<String>,
}

impl NameGenerator {
    /// Create a generator over `options`. The list must not be empty.
    pub fn new(field: impl Into<String>, options: Vec<String>) -> Result<Self, GeneratorError> {
        let field = field.into();
        if options.is_empty() {
            return Err(GeneratorError::EmptyOptionSet { field });
        }
        Ok(Self { field, options })
    }

    /// Create a generator over [`DEFAULT_NAMES`].
    pub fn with_default_names(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            options: DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl ValueGenerator for NameGenerator {
    fn name(&self) -> &str {
        &self.field
    }

    fn generate<R: Rng>(&self, rng: &mut R) -> GeneratedValue {
        let idx = rng.gen_range(0..self.options.len());
        GeneratedValue::String(self.options[idx].clone())
    }
}
