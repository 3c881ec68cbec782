//! The demo dataset. Notes are identified by their position in [`NOTES`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Note {
    pub title: &'static str,
    pub content: &'static str,
}

impl Note {
    pub const fn new(title: &'static str, content: &'static str) -> Self {
        Self { title, content }
    }

    pub fn field(&self, field: Field) -> &'static str {
        match field {
            Field::Title => self.title,
            Field::Content => self.content,
        }
    }
}

/// A searchable field of a [`Note`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Title, Field::Content];
}

pub fn all() -> &'static [Note] {
    NOTES
}

pub static NOTES: &[Note] = &[
    Note::new(
        "Grocery List",
        "Eggs, Milk, Bread, Butter, Cheese, Apples, Bananas, Oranges, Chicken, Broccoli.",
    ),
    Note::new(
        "Meeting Notes",
        "Discussed Q2 targets. Need to increase marketing spend. Hire 2 more sales reps.",
    ),
    Note::new(
        "Book Recommendations",
        "The Silent Patient, The Nightingale, Where the Crawdads Sing, Educated.",
    ),
    Note::new(
        "Travel Itinerary",
        "Day 1: Arrival, Day 2: City tour, Day 3: Visit museums, Day 4: Beach, Day 5: Departure.",
    ),
    Note::new(
        "Workout Plan",
        "Monday: Chest, Tuesday: Back, Wednesday: Legs, Thursday: Shoulders, Friday: Arms.",
    ),
    Note::new(
        "Coding Todo",
        "Fix bug in search component. Improve mobile responsiveness. Add tests for new features.",
    ),
    Note::new(
        "Birthday Party Ideas",
        "Theme: Superheroes, Cake: Batman, Games: Treasure hunt, Costume contest.",
    ),
    Note::new(
        "Recipe: Spaghetti Carbonara",
        "Ingredients: Spaghetti, Eggs, Bacon, Parmesan, Garlic, Salt, Pepper.",
    ),
    Note::new(
        "Health Goals",
        "1. Run 3 times a week. 2. Eat more vegetables. 3. Drink 2L of water daily. 4. Sleep 8 hours.",
    ),
    Note::new(
        "New Year Resolutions",
        "1. Read 1 book per month. 2. Learn a new language. 3. Travel to a new country.",
    ),
    Note::new(
        "Famous Quotes",
        "1. 'The only way to do great work is to love what you do.' - Steve Jobs. 2. 'The mind is everything. What you think you become.' - Buddha. 3. 'In the middle of every difficulty lies opportunity.' - Albert Einstein.",
    ),
    Note::new(
        "Movie List",
        "Inception, The Dark Knight, The Godfather, Pulp Fiction, The Shawshank Redemption, Fight Club, The Matrix, Schindler's List.",
    ),
    Note::new(
        "Gardening To-do",
        "Water plants. Trim hedges. Mow lawn. Plant new rose bushes. Fertilize flower bed.",
    ),
    Note::new(
        "Learning Goals",
        "Complete online course in AI. Attend Python coding workshop. Read 5 books on data science. Get certified in machine learning.",
    ),
    Note::new(
        "Home Improvement",
        "Paint living room. Fix leaky faucet. Organize garage. Install new light fixtures in kitchen.",
    ),
    Note::new(
        "Favorite Recipes",
        "Butter Chicken, Tacos, Caesar Salad, Margherita Pizza, Chocolate Chip Cookies, Red Velvet Cake.",
    ),
    Note::new(
        "Children's Schedule",
        "Monday: Soccer practice, Tuesday: Music lessons, Wednesday: Tutoring, Thursday: Playdate, Friday: Swimming lessons.",
    ),
    Note::new(
        "Motivational Quotes",
        "1. 'The future belongs to those who believe in the beauty of their dreams.' - Eleanor Roosevelt. 2. 'The only limit to our realization of tomorrow will be our doubts of today.' - Franklin D. Roosevelt. 3. 'You are never too old to set another goal or to dream a new dream.' - C.S. Lewis.",
    ),
    Note::new(
        "Weekly Menu",
        "Monday: Salmon and veggies, Tuesday: Chicken stir-fry, Wednesday: Spaghetti Bolognese, Thursday: Vegan curry, Friday: Pizza night.",
    ),
    Note::new(
        "Business Ideas",
        "Online tutoring platform, Mobile pet grooming service, Virtual reality fitness app, Eco-friendly clothing line.",
    ),
    Note::new(
        "Photography Locations",
        "Golden Gate Bridge, Grand Canyon, Niagara Falls, Eiffel Tower, Pyramids of Giza, Santorini, Maldives, Great Barrier Reef.",
    ),
    Note::new(
        "Leadership Quotes",
        "1. 'The greatest leader is not necessarily the one who does the greatest things. He is the one that gets the people to do the greatest things.' - Ronald Reagan. 2. 'I can't change the direction of the wind, but I can adjust my sails to always reach my destination.' - Jimmy Dean.",
    ),
    Note::new(
        "Family Game Night",
        "Monopoly, Scrabble, Uno, Jenga, Pictionary, Codenames, Twister, Catan.",
    ),
    Note::new(
        "Learning Resources",
        "Coursera, Khan Academy, Codecademy, Udemy, OpenAI, edX, Project Euler, LeetCode.",
    ),
    Note::new(
        "Local Events",
        "Farmers market on Saturday, Book club on Tuesday, Jazz concert on Friday, Art exhibit opening next week.",
    ),
    Note::new(
        "Self-Care Routine",
        "Morning yoga, Healthy breakfast, 10-minute meditation, Evening skincare routine, Read before bed.",
    ),
    Note::new(
        "Inspiring Book Quotes",
        "1. 'It is our choices, Harry, that show what we truly are, far more than our abilities.' - J.K. Rowling, Harry Potter and the Chamber of Secrets. 2. 'I wish it need not have happened in my time,' said Frodo. 'So do I,' said Gandalf, 'and so do all who live to see such times. But that is not for them to decide. All we have to decide is what to do with the time that is given us.' - J.R.R. Tolkien, The Fellowship of the Ring.",
    ),
    Note::new(
        "Healthy Snack Ideas",
        "Hummus and vegetables, Greek yogurt and berries, Peanut butter and apple slices, Almonds, Protein shake, Boiled eggs.",
    ),
    Note::new(
        "Outdoor Activities",
        "Hiking, Biking, Swimming, Camping, Kayaking, Rock climbing, Bird watching, Picnicking.",
    ),
    Note::new(
        "DIY Projects",
        "Build a birdhouse, Create homemade soap, Knit a scarf, Paint a canvas, Plant an herb garden, Refurbish an old chair.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_holds_the_demo_notes_in_order() {
        let notes = all();
        assert_eq!(notes.len(), 30);
        assert_eq!(notes[0].title, "Grocery List");
        assert_eq!(notes[29].title, "DIY Projects");
    }

    #[test]
    fn field_accessor_picks_the_right_text() {
        let note = all()[0];
        assert_eq!(note.field(Field::Title), "Grocery List");
        assert!(note.field(Field::Content).contains("Chicken"));
    }
}
