use super::timestamp;
use super::users::unsplash;
use crate::models::{Comment, Post};
use chrono::{DateTime, Utc};

struct Author {
    id: &'static str,
    username: &'static str,
    photo: &'static str,
}

const FITNESS_PRO: Author = Author {
    id: "1",
    username: "fitness_pro",
    photo: "1534528741775-53994a69daeb",
};
const STRENGTH_BUILDER: Author = Author {
    id: "2",
    username: "strength_builder",
    photo: "1531427186611-ecfd6d936c79",
};
const CARDIO_QUEEN: Author = Author {
    id: "3",
    username: "cardio_queen",
    photo: "1531746020798-e6953c6e8e04",
};
const FITNESS_NEWBIE: Author = Author {
    id: "4",
    username: "fitness_newbie",
    photo: "1544005313-94ddf0286df2",
};

fn comment(id: &str, author: &Author, content: &str, at: DateTime<Utc>) -> Comment {
    Comment {
        id: id.to_string(),
        user_id: author.id.to_string(),
        username: author.username.to_string(),
        user_avatar: unsplash(author.photo),
        content: content.to_string(),
        timestamp: at,
    }
}

fn post(id: &str, author: &Author, content: &str, likes: u32, at: DateTime<Utc>) -> Post {
    Post {
        id: id.to_string(),
        user_id: author.id.to_string(),
        username: author.username.to_string(),
        user_avatar: unsplash(author.photo),
        content: content.to_string(),
        image_url: None,
        video_url: None,
        workout_id: None,
        likes,
        comments: Vec::new(),
        timestamp: at,
    }
}

/// Initial feed, newest last
pub fn posts() -> Vec<Post> {
    vec![
        Post {
            image_url: Some(unsplash("1598575468023-f9472c9e1abe")),
            workout_id: Some("1".to_string()),
            comments: vec![
                comment(
                    "101",
                    &STRENGTH_BUILDER,
                    "Beast mode! Keep it up! 🔥",
                    timestamp(2023, 6, 15, 14, 35),
                ),
                comment(
                    "102",
                    &CARDIO_QUEEN,
                    "What's your training split like?",
                    timestamp(2023, 6, 15, 15, 12),
                ),
            ],
            ..post(
                "1",
                &FITNESS_PRO,
                "Just crushed a new PR on deadlifts! 405lbs x 3 reps. Hard work pays off! 💪",
                156,
                timestamp(2023, 6, 15, 14, 30),
            )
        },
        Post {
            video_url: Some("https://example.com/squat-video.mp4".to_string()),
            comments: vec![comment(
                "103",
                &FITNESS_PRO,
                "Looking solid! Try pointing your toes out slightly more to help with depth.",
                timestamp(2023, 6, 16, 10, 45),
            )],
            ..post(
                "2",
                &STRENGTH_BUILDER,
                "Form check on my squat. Trying to hit depth while keeping my back straight. Any tips?",
                89,
                timestamp(2023, 6, 16, 10, 30),
            )
        },
        Post {
            image_url: Some(unsplash("1476480862126-209bfaa8edc8")),
            workout_id: Some("2".to_string()),
            comments: vec![
                comment(
                    "104",
                    &FITNESS_NEWBIE,
                    "That's impressive! I'm still working on my first 5K.",
                    timestamp(2023, 6, 17, 8, 15),
                ),
                comment(
                    "105",
                    &FITNESS_PRO,
                    "What's your next race?",
                    timestamp(2023, 6, 17, 9, 30),
                ),
            ],
            ..post(
                "3",
                &CARDIO_QUEEN,
                "Morning run complete! 10K in 45 minutes. Perfect way to start the day. 🏃‍♀️",
                112,
                timestamp(2023, 6, 17, 8, 0),
            )
        },
        Post {
            image_url: Some(unsplash("1598575468023-f9472c9e1abe")),
            comments: vec![
                comment(
                    "106",
                    &STRENGTH_BUILDER,
                    "Looking good for a beginner! Try to keep your back a bit flatter and push through your heels.",
                    timestamp(2023, 6, 18, 16, 45),
                ),
                comment(
                    "107",
                    &FITNESS_PRO,
                    "Great start! Focus on bracing your core before each rep. Keep it up!",
                    timestamp(2023, 6, 18, 17, 30),
                ),
            ],
            ..post(
                "4",
                &FITNESS_NEWBIE,
                "First time trying deadlifts today. How's my form looking? Any tips appreciated!",
                34,
                timestamp(2023, 6, 18, 16, 30),
            )
        },
    ]
}
