//! Static wellness content: the book library, the video hub, and the
//! counsellor roster. All in-memory; browsing never touches disk or
//! network.

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Copy)]
pub struct Book {
    pub title: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub rating: f32,
}

impl Book {
    /// Search covers title and author, as in the library search bar.
    pub fn matches(&self, query: &str) -> bool {
        contains_ci(self.title, query) || contains_ci(self.author, query)
    }
}

pub const BOOKS: &[Book] = &[
    Book {
        title: "The Power of Now",
        author: "Eckhart Tolle",
        description: "A guide to spiritual enlightenment and living in the present moment.",
        rating: 4.8,
    },
    Book {
        title: "Atomic Habits",
        author: "James Clear",
        description: "An easy & proven way to build good habits & break bad ones.",
        rating: 4.9,
    },
    Book {
        title: "The Subtle Art of Not Giving a F*ck",
        author: "Mark Manson",
        description: "A counterintuitive approach to living a good life.",
        rating: 4.7,
    },
    Book {
        title: "Think Like a Monk",
        author: "Jay Shetty",
        description: "Train your mind for peace and purpose every day.",
        rating: 4.8,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Video {
    pub title: &'static str,
    pub creator: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub views: &'static str,
}

impl Video {
    pub fn matches(&self, query: &str) -> bool {
        contains_ci(self.title, query) || contains_ci(self.creator, query)
    }

    pub fn in_category(&self, category: &str) -> bool {
        category.eq_ignore_ascii_case("all") || self.category.eq_ignore_ascii_case(category)
    }
}

pub const VIDEO_CATEGORIES: &[&str] = &[
    "All",
    "Meditation",
    "Motivation",
    "Study Tips",
    "Stress Relief",
    "Mindfulness",
    "Self-Care",
];

pub const VIDEOS: &[Video] = &[
    Video {
        title: "Morning Meditation for Students",
        creator: "Mindful Learning",
        category: "Meditation",
        duration: "10:30",
        description: "Start your day with focus and clarity through this guided meditation designed specifically for students.",
        views: "12.5K",
    },
    Video {
        title: "Overcoming Study Anxiety",
        creator: "Dr. Alex Thompson",
        category: "Stress Relief",
        duration: "15:45",
        description: "Learn practical techniques to manage exam stress and study anxiety effectively.",
        views: "18.2K",
    },
    Video {
        title: "The Science of Motivation",
        creator: "Growth Mindset",
        category: "Motivation",
        duration: "12:20",
        description: "Discover what drives motivation and how to maintain it during challenging times.",
        views: "25.7K",
    },
    Video {
        title: "Effective Study Techniques",
        creator: "Study Smart",
        category: "Study Tips",
        duration: "18:15",
        description: "Evidence-based study methods that will improve your learning efficiency and retention.",
        views: "31.4K",
    },
    Video {
        title: "Building Self-Compassion",
        creator: "Wellness Works",
        category: "Self-Care",
        duration: "14:30",
        description: "Learn to treat yourself with kindness and develop a healthier relationship with yourself.",
        views: "9.8K",
    },
    Video {
        title: "5-Minute Breathing Exercise",
        creator: "Calm Campus",
        category: "Mindfulness",
        duration: "5:00",
        description: "Quick breathing exercise perfect for between classes or during study breaks.",
        views: "45.1K",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Counsellor {
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f32,
    pub experience: &'static str,
    pub description: &'static str,
    pub availability: &'static [&'static str],
}

impl Counsellor {
    pub fn matches(&self, query: &str) -> bool {
        contains_ci(self.name, query) || contains_ci(self.specialty, query)
    }
}

pub const COUNSELLORS: &[Counsellor] = &[
    Counsellor {
        name: "Dr. Sarah Chen",
        specialty: "Stress & Anxiety",
        rating: 4.9,
        experience: "8 years",
        description: "Specializes in cognitive behavioral therapy and mindfulness techniques for managing academic stress.",
        availability: &["9:00 AM", "11:00 AM", "2:00 PM", "4:00 PM"],
    },
    Counsellor {
        name: "Dr. Michael Rodriguez",
        specialty: "Career Guidance",
        rating: 4.8,
        experience: "12 years",
        description: "Helps students navigate career decisions and build confidence in professional development.",
        availability: &["10:00 AM", "1:00 PM", "3:00 PM", "5:00 PM"],
    },
    Counsellor {
        name: "Dr. Emily Johnson",
        specialty: "Relationships & Social",
        rating: 4.9,
        experience: "6 years",
        description: "Focuses on interpersonal relationships, social anxiety, and building healthy connections.",
        availability: &["9:30 AM", "12:00 PM", "2:30 PM", "4:30 PM"],
    },
    Counsellor {
        name: "Dr. David Kim",
        specialty: "Academic Pressure",
        rating: 4.7,
        experience: "10 years",
        description: "Helps students manage academic workload, test anxiety, and develop effective study strategies.",
        availability: &["8:00 AM", "11:30 AM", "1:30 PM", "6:00 PM"],
    },
];
