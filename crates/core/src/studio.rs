//! Static studio configuration: business identity, weekly hours, and the
//! class-type catalog. This is compile-time data with no runtime mutation;
//! the admin workflows never write here.

use serde::Serialize;

pub const STUDIO_NAME: &str = "Seen Fitness";
pub const STUDIO_TAGLINE: &str = "A fitness program that actually sees you.";
pub const STUDIO_EMAIL: &str = "hello@seenfitness.com";
pub const STUDIO_PHONE: &str = "(770) 555-0123";
pub const STUDIO_CITY: &str = "Lilburn, GA";

/// One entry in the class-type catalog. Capacity here is the recommended
/// cap for the type; the per-session capacity on a scheduled class may
/// differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassTypeOption {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub default_capacity: i32,
}

pub const CLASS_TYPES: [ClassTypeOption; 3] = [
    ClassTypeOption {
        name: "Strength & Conditioning",
        slug: "strength-conditioning",
        description: "Small-group strength work with real coaching and individual scaling, \
                      from first barbell session to new PR.",
        default_capacity: 12,
    },
    ClassTypeOption {
        name: "Kickboxing & Self-Defense",
        slug: "kickboxing",
        description: "Striking technique, cardio endurance, and self-defense awareness, \
                      adjusted to every level.",
        default_capacity: 16,
    },
    ClassTypeOption {
        name: "Somatic Movement",
        slug: "somatic-movement",
        description: "Breathwork and mindful movement to release chronic tension and \
                      reconnect mind and body.",
        default_capacity: 8,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayHours {
    pub day: &'static str,
    pub hours: &'static str,
}

pub const WEEKLY_HOURS: [DayHours; 7] = [
    DayHours { day: "Monday", hours: "6:00 AM - 8:00 PM" },
    DayHours { day: "Tuesday", hours: "6:00 AM - 8:00 PM" },
    DayHours { day: "Wednesday", hours: "6:00 AM - 8:00 PM" },
    DayHours { day: "Thursday", hours: "6:00 AM - 8:00 PM" },
    DayHours { day: "Friday", hours: "6:00 AM - 6:00 PM" },
    DayHours { day: "Saturday", hours: "8:00 AM - 12:00 PM" },
    DayHours { day: "Sunday", hours: "Closed" },
];

pub fn class_type_by_slug(slug: &str) -> Option<&'static ClassTypeOption> {
    CLASS_TYPES.iter().find(|option| option.slug == slug)
}
