use std::collections::BTreeMap;

use crate::models::Activity;

pub const SEED_ACTIVITY_COUNT: usize = 9;

/// The activities every fresh roster starts with.
pub fn seed_activities() -> BTreeMap<String, Activity> {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Competitive basketball training and games",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Tennis instruction and practice matches",
                "Wednesdays and Saturdays, 4:00 PM - 5:00 PM",
                10,
            ),
        ),
        (
            "Debate Club",
            Activity::new(
                "Develop public speaking and critical thinking skills",
                "Mondays and Wednesdays, 3:30 PM - 4:30 PM",
                16,
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Explore scientific concepts through experiments and projects",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
            ),
        ),
        (
            "Painting Studio",
            Activity::new(
                "Learn various painting techniques and artistic expression",
                "Tuesdays and Saturdays, 4:00 PM - 5:30 PM",
                12,
            ),
        ),
        (
            "Theater Production",
            Activity::new(
                "Perform in school plays and develop acting skills",
                "Thursdays and Fridays, 4:00 PM - 5:30 PM",
                25,
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let activities = seed_activities();
        assert_eq!(activities.len(), SEED_ACTIVITY_COUNT);

        let seeded: usize = activities.values().map(|a| a.participants.len()).sum();
        assert_eq!(seeded, 6);

        // Every seeded student shares the school domain
        assert!(activities
            .values()
            .flat_map(|a| a.participants.iter())
            .all(|email| email.ends_with("@mergington.edu")));
    }

    #[test]
    fn test_seed_capacities() {
        let activities = seed_activities();
        let caps: Vec<(&str, usize)> = vec![
            ("Chess Club", 12),
            ("Programming Class", 20),
            ("Gym Class", 30),
            ("Basketball Team", 15),
            ("Tennis Club", 10),
            ("Debate Club", 16),
            ("Science Club", 18),
            ("Painting Studio", 12),
            ("Theater Production", 25),
        ];
        for (name, cap) in caps {
            assert_eq!(activities[name].max_participants, cap, "{name}");
        }
    }

    #[test]
    fn test_seed_exact_records() {
        let expected: [(&str, &str, &str, &[&str]); 9] = [
            (
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
            (
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
            (
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
            (
                "Basketball Team",
                "Competitive basketball training and games",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                &[],
            ),
            (
                "Tennis Club",
                "Tennis instruction and practice matches",
                "Wednesdays and Saturdays, 4:00 PM - 5:00 PM",
                &[],
            ),
            (
                "Debate Club",
                "Develop public speaking and critical thinking skills",
                "Mondays and Wednesdays, 3:30 PM - 4:30 PM",
                &[],
            ),
            (
                "Science Club",
                "Explore scientific concepts through experiments and projects",
                "Thursdays, 3:30 PM - 5:00 PM",
                &[],
            ),
            (
                "Painting Studio",
                "Learn various painting techniques and artistic expression",
                "Tuesdays and Saturdays, 4:00 PM - 5:30 PM",
                &[],
            ),
            (
                "Theater Production",
                "Perform in school plays and develop acting skills",
                "Thursdays and Fridays, 4:00 PM - 5:30 PM",
                &[],
            ),
        ];

        let activities = seed_activities();
        assert_eq!(activities.len(), expected.len());
        for (name, description, schedule, participants) in expected {
            let activity = &activities[name];
            assert_eq!(activity.description, description, "{name}");
            assert_eq!(activity.schedule, schedule, "{name}");
            assert_eq!(activity.participants, participants, "{name}");
        }
    }
}
