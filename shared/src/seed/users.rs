use super::date;
use crate::models::{Rank, User};

const UNSPLASH_BASE: &str = "https://images.unsplash.com/photo-";
const UNSPLASH_QUERY: &str = "?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60";

pub(crate) fn unsplash(photo: &str) -> String {
    format!("{}{}{}", UNSPLASH_BASE, photo, UNSPLASH_QUERY)
}

/// Demo user table; login matches against these emails
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            username: "fitness_pro".to_string(),
            email: "fitness_pro@example.com".to_string(),
            avatar: unsplash("1534528741775-53994a69daeb"),
            bio: Some(
                "Personal trainer and nutrition coach. Helping people achieve their fitness goals for over 5 years."
                    .to_string(),
            ),
            level: 42,
            experience: 8400,
            rank: Rank::Elite,
            join_date: date(2021, 3, 15),
            followers: 1250,
            following: 345,
        },
        User {
            id: "2".to_string(),
            username: "strength_builder".to_string(),
            email: "strength_builder@example.com".to_string(),
            avatar: unsplash("1531427186611-ecfd6d936c79"),
            bio: Some(
                "Powerlifter and strength coach. Current PR: 500lb deadlift, 405lb squat, 315lb bench."
                    .to_string(),
            ),
            level: 35,
            experience: 7000,
            rank: Rank::Advanced,
            join_date: date(2021, 5, 22),
            followers: 850,
            following: 420,
        },
        User {
            id: "3".to_string(),
            username: "cardio_queen".to_string(),
            email: "cardio_queen@example.com".to_string(),
            avatar: unsplash("1531746020798-e6953c6e8e04"),
            bio: Some("Marathon runner and yoga enthusiast. Completed 6 marathons and counting!".to_string()),
            level: 28,
            experience: 5600,
            rank: Rank::Intermediate,
            join_date: date(2021, 8, 10),
            followers: 620,
            following: 310,
        },
        User {
            id: "4".to_string(),
            username: "fitness_newbie".to_string(),
            email: "fitness_newbie@example.com".to_string(),
            avatar: unsplash("1544005313-94ddf0286df2"),
            bio: Some("Just starting my fitness journey. Looking to lose weight and build strength.".to_string()),
            level: 5,
            experience: 1000,
            rank: Rank::Beginner,
            join_date: date(2023, 1, 5),
            followers: 45,
            following: 120,
        },
    ]
}
