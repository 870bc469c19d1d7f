use super::model::Track;

const SEED: [(u32, &str, &str, &str, &str); 10] = [
    (1, "Neon Flux", "Dreamscape Symphony", "assets/electronic.png", "Featured"),
    (2, "Rainy Nights", "Lofi Girl", "assets/lofi.png", "Featured"),
    (3, "Smoke & Steel", "Iron Echoes", "assets/rock.png", "Featured"),
    (4, "Luna Pulse", "Nova Night", "assets/pop.png", "Featured"),
    (
        5,
        "Deep Red",
        "Crimson Waves",
        "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?w=400&h=400&fit=crop",
        "Recent",
    ),
    (
        6,
        "Midnight City",
        "M83",
        "https://images.unsplash.com/photo-1614613535308-eb5fbd3d2c17?w=400&h=400&fit=crop",
        "Recent",
    ),
    (
        7,
        "Crimson Ghost",
        "The Shadows",
        "https://images.unsplash.com/photo-1498038432885-c6f3f1b912ee?w=400&h=400&fit=crop",
        "Viral",
    ),
    (
        8,
        "Ruby Dreams",
        "Scarlet",
        "https://images.unsplash.com/photo-1508700115892-45ecd05ae2ad?w=400&h=400&fit=crop",
        "Viral",
    ),
    (
        9,
        "Dark Pulse",
        "Void",
        "https://images.unsplash.com/photo-1514525253361-bee8a18744ad?w=400&h=400&fit=crop",
        "Electro",
    ),
    (
        10,
        "Blood Moon",
        "Lunar",
        "https://images.unsplash.com/photo-1516280440614-37939bbacd81?w=400&h=400&fit=crop",
        "Electro",
    ),
];

/// The seed catalog used when nothing usable is persisted.
pub fn default_tracks() -> Vec<Track> {
    SEED.iter()
        .map(|&(id, title, artist, img, category)| Track {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            img: img.to_string(),
            audio: format!("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-{id}.mp3"),
            category: category.to_string(),
            is_liked: false,
        })
        .collect()
}
