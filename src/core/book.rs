//! # Book
//!
//! The story itself: a cover plus ten illustrated pages.
//!
//! Page indices follow the navigator: `0` is the cover, `1..=N` are story
//! pages. [`Book::page`] takes that same 1-based index.

/// Remote artwork for a story page. Only the URL and a text description are
/// known here; fetching is done by [`crate::preload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Illustration {
    pub url: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub text: &'static str,
    pub illustration: Illustration,
}

#[derive(Debug, Clone)]
pub struct Book {
    pub title: &'static str,
    pub subtitle: &'static str,
    pages: Vec<Page>,
}

impl Book {
    pub fn new(title: &'static str, subtitle: &'static str, pages: Vec<Page>) -> Self {
        Self {
            title,
            subtitle,
            pages,
        }
    }

    /// Number of story pages (the cover is not counted).
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Story page by 1-based index. `page(0)` is the cover and returns `None`.
    pub fn page(&self, index: usize) -> Option<&Page> {
        index.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    pub fn illustration_urls(&self) -> Vec<String> {
        self.pages
            .iter()
            .map(|p| p.illustration.url.to_string())
            .collect()
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new(
            "Dino's Big Day Out",
            "A story about a small dinosaur and a very big world",
            default_pages(),
        )
    }
}

macro_rules! story_page {
    ($path:literal, $alt:literal, $text:literal) => {
        Page {
            text: $text,
            illustration: Illustration {
                url: concat!("https://pplx-res.cloudinary.com/image/upload", $path),
                alt: $alt,
            },
        }
    };
}

fn default_pages() -> Vec<Page> {
    vec![
        story_page!(
            "/v1750392894/gpt4o_images/psi9vhsamwtzimrnfoz1.png",
            "A little green dinosaur yawning in a nest of leaves at sunrise",
            "Once upon a time, in a valley full of ferns, lived a little dinosaur named Dino. \
             Every morning the sun tickled Dino's nose until he woke up with a great big yawn."
        ),
        story_page!(
            "/v1750392956/gpt4o_images/rtfqevinrg8lovxemlzc.png",
            "Dino peeking over a hill at a winding path",
            "One morning Dino saw a path he had never noticed before. \
             It curled over the hill like a sleepy snake. \"Where do you go?\" he wondered."
        ),
        story_page!(
            "/v1750393039/gpt4o_images/twlfy5wc5wkzxbyfswes.png",
            "Dino meeting a friendly triceratops by a stream",
            "By the stream he met Tops, a triceratops with a very shiny horn. \
             \"I'm going on an adventure,\" said Dino. \"Can I come too?\" asked Tops."
        ),
        story_page!(
            "/v1750393106/gpt4o_images/vmzhcdudxvbfbbgnbjdq.png",
            "Two dinosaurs crossing a log bridge over rushing water",
            "The path led to a rushing river. A fallen log made a wobbly bridge. \
             Dino and Tops held their breath and tiptoed across, one step at a time."
        ),
        story_page!(
            "/v1750393160/gpt4o_images/hvjwontcckjxobpybv58.png",
            "A pterodactyl swooping down from a cliff",
            "Whoosh! A pterodactyl named Ptera swooped down from the cliffs. \
             \"You two look lost,\" she laughed. \"Follow me, I can see everything from up here!\""
        ),
        story_page!(
            "/v1750393222/gpt4o_images/a6mfrdsbae28v4rvjuon.png",
            "Dinosaurs sharing berries in a sunny meadow",
            "In a sunny meadow they found bushes heavy with purple berries. \
             They shared every single one, and Dino's face turned purple from the juice."
        ),
        story_page!(
            "/v1750393284/gpt4o_images/lkio6kvcgsv0mgjxiqey.png",
            "Dark clouds gathering over a volcano in the distance",
            "Suddenly the sky grew dark and the ground gave a grumbly rumble. \
             Far away, the old volcano puffed a cloud of smoke. \"Time to go home!\" called Ptera."
        ),
        story_page!(
            "/v1750393385/gpt4o_images/rah8kdlk3tvsnmtgatge.png",
            "Friends huddled together in a cozy cave during the rain",
            "Rain poured down, so the friends hid in a cozy cave. \
             They told stories and giggled until the storm rolled away."
        ),
        story_page!(
            "/v1750393446/gpt4o_images/efko2lcqfshitfwpid8s.png",
            "A rainbow stretching across the valley",
            "When they stepped outside, a rainbow stretched across the whole valley. \
             \"It's pointing the way home,\" said Dino, and off they went."
        ),
        story_page!(
            "/v1750393492/gpt4o_images/jajsbqys1slw6esztpje.png",
            "Dino asleep under the stars with his new friends",
            "That night Dino fell asleep under the stars, dreaming of rivers, berries and rainbows. \
             The best adventures, he decided, are the ones you share with friends. The End."
        ),
    ]
}
