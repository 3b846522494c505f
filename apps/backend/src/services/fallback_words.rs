//! Built-in word lists used when the random-word source is unavailable.

use crate::domain::word::Category;

const ALL: &[&str] = &[
    "adventure", "beautiful", "challenge", "discovery", "elephant", "fantastic", "gorgeous",
    "happiness", "incredible", "journey", "knowledge", "landscape", "mysterious", "nightmare",
    "orchestra", "paradise", "question", "remarkable", "sunshine", "treasure", "umbrella",
    "vacation", "wonderful", "xylophone", "yesterday", "zodiac", "algorithm", "butterfly",
    "celebrate", "dangerous", "education", "favourite", "gratitude", "hamburger", "important",
    "jellyfish", "kangaroo", "lightning", "mountains", "nutrition",
];

const MOVIES: &[&str] = &[
    "inception", "avatar", "titanic", "gladiator", "interstellar", "parasite", "joker",
    "frozen", "matrix", "godfather", "casablanca", "shawshank", "forrest", "pulpfiction",
    "goodfellas", "spirited", "departed", "prestige", "memento", "wolverine", "avengers",
    "batman", "superman", "spiderman", "ironman",
];

const ANIMALS: &[&str] = &[
    "elephant", "giraffe", "penguin", "dolphin", "kangaroo", "butterfly", "crocodile",
    "flamingo", "hedgehog", "jellyfish", "leopard", "mongoose", "nightingale", "octopus",
    "peacock", "rhinoceros", "squirrel", "tortoise", "vulture", "wolverine", "zebra",
    "antelope", "buffalo", "cheetah", "dragonfly",
];

const TECHNOLOGY: &[&str] = &[
    "algorithm", "bluetooth", "database", "encryption", "framework", "gigabyte", "hardware",
    "interface", "javascript", "keyboard", "laptop", "microchip", "network", "operating",
    "processor", "quantum", "robotics", "software", "terminal", "username", "virtual",
    "wireless", "android", "computer", "developer",
];

const SPORTS: &[&str] = &[
    "basketball", "volleyball", "swimming", "athletics", "badminton", "baseball", "football",
    "gymnastics", "handball", "hockey", "lacrosse", "marathon", "olympiad", "pentathlon",
    "wrestling", "archery", "bowling", "climbing", "diving", "equestrian", "fencing", "golfing",
    "skating", "surfing", "tennis",
];

const FOOD: &[&str] = &[
    "spaghetti", "hamburger", "chocolate", "avocado", "broccoli", "croissant", "dumplings",
    "espresso", "fettuccine", "guacamole", "hummus", "icecream", "jalapeno", "kebab", "lasagna",
    "macaroni", "noodles", "omelette", "pancakes", "quesadilla", "ratatouille", "sandwich",
    "taco", "udon", "vanilla",
];

const COUNTRIES: &[&str] = &[
    "australia", "brazil", "canada", "denmark", "ethiopia", "finland", "germany", "hungary",
    "indonesia", "jamaica", "kazakhstan", "luxembourg", "malaysia", "netherlands", "portugal",
    "romania", "singapore", "thailand", "ukraine", "venezuela", "argentina", "belgium",
    "colombia", "egypt", "france",
];

const SCIENCE: &[&str] = &[
    "astronomy", "biology", "chemistry", "physics", "geology", "mathematics", "psychology",
    "sociology", "zoology", "botany", "genetics", "neurology", "pathology", "radiology",
    "toxicology", "ecology", "anatomy", "cytology", "histology", "immunology", "microbiology",
    "paleontology", "pharmacology", "physiology", "virology",
];

/// Word list for `category`; unknown or random categories use the general list.
pub fn words_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Movies => MOVIES,
        Category::Animals => ANIMALS,
        Category::Technology => TECHNOLOGY,
        Category::Sports => SPORTS,
        Category::Food => FOOD,
        Category::Countries => COUNTRIES,
        Category::Science => SCIENCE,
        Category::All | Category::Random => ALL,
    }
}
