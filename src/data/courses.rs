//! The course/year/subject/topic catalog.
//!
//! Content is static: three degree programmes, each with three years of
//! subjects. A topic may carry a lesson video URL and a narration used as
//! quiz-generation context.

/// A single lesson topic under a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub title: &'static str,
    pub video_url: Option<&'static str>,
    pub narration: Option<&'static str>,
}

impl Topic {
    const fn plain(title: &'static str) -> Self {
        Self {
            title,
            video_url: None,
            narration: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Short code shown in lists (e.g. "DBMS").
    pub code: &'static str,
    /// Full display name.
    pub name: &'static str,
    pub topics: &'static [Topic],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    pub label: &'static str,
    pub subjects: &'static [Subject],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: &'static str,
    pub name: &'static str,
    pub years: &'static [Year],
}

impl Course {
    pub fn year(&self, label: &str) -> Option<&Year> {
        self.years.iter().find(|y| y.label == label)
    }
}

impl Year {
    pub fn subject(&self, code: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.code == code)
    }
}

impl Subject {
    pub fn topic(&self, title: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.title == title)
    }
}

/// All available courses.
pub fn catalog() -> &'static [Course] {
    COURSES
}

/// Look up a course by its short code.
pub fn find_course(code: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.code == code)
}

const SQL_NARRATION: &str = "In this lesson, we will learn SQL, which stands for \
Structured Query Language. SQL is used to store, retrieve, and manage data in \
databases. By the end of this lesson, you will understand how to write basic SQL \
queries and work with databases confidently.";

static DBMS_TOPICS: &[Topic] = &[
    Topic {
        title: "Normalization",
        video_url: Some("https://www.youtube.com/embed/XXXXXXXX"),
        narration: None,
    },
    Topic {
        title: "SQL",
        video_url: Some("https://www.youtube.com/embed/hlGoQC332VM"),
        narration: Some(SQL_NARRATION),
    },
    Topic {
        title: "ER Diagram",
        video_url: Some("https://www.youtube.com/embed/XXXXXXXX"),
        narration: None,
    },
    Topic {
        title: "Transactions",
        video_url: Some("https://www.youtube.com/embed/XXXXXXXX"),
        narration: None,
    },
    Topic {
        title: "Indexing",
        video_url: Some("https://www.youtube.com/embed/XXXXXXXX"),
        narration: None,
    },
];

static DS_TOPICS: &[Topic] = &[
    Topic::plain("Arrays"),
    Topic::plain("Linked Lists"),
    Topic::plain("Trees"),
    Topic::plain("Graphs"),
    Topic::plain("Sorting Algorithms"),
];

static COURSES: &[Course] = &[
    Course {
        code: "BCA",
        name: "Bachelor of Computer Applications",
        years: &[
            Year {
                label: "1st Year",
                subjects: &[
                    Subject {
                        code: "DBMS",
                        name: "Database Management System",
                        topics: DBMS_TOPICS,
                    },
                    Subject {
                        code: "DS",
                        name: "Data Structures",
                        topics: DS_TOPICS,
                    },
                ],
            },
            Year {
                label: "2nd Year",
                subjects: &[
                    Subject {
                        code: "OS",
                        name: "Operating System",
                        topics: &[
                            Topic::plain("Process Management"),
                            Topic::plain("Memory Management"),
                            Topic::plain("File Systems"),
                            Topic::plain("Deadlock"),
                            Topic::plain("Synchronization"),
                        ],
                    },
                    Subject {
                        code: "WebDev",
                        name: "Web Development",
                        topics: &[
                            Topic::plain("HTML/CSS"),
                            Topic::plain("JavaScript"),
                            Topic::plain("React"),
                            Topic::plain("Node.js"),
                            Topic::plain("MongoDB"),
                        ],
                    },
                ],
            },
            Year {
                label: "3rd Year",
                subjects: &[
                    Subject {
                        code: "ML",
                        name: "Machine Learning",
                        topics: &[
                            Topic::plain("Linear Regression"),
                            Topic::plain("Decision Trees"),
                            Topic::plain("Neural Networks"),
                            Topic::plain("NLP"),
                            Topic::plain("Computer Vision"),
                        ],
                    },
                    Subject {
                        code: "CloudComputing",
                        name: "Cloud Computing",
                        topics: &[
                            Topic::plain("AWS"),
                            Topic::plain("Azure"),
                            Topic::plain("GCP"),
                            Topic::plain("Containers"),
                            Topic::plain("Kubernetes"),
                        ],
                    },
                ],
            },
        ],
    },
    Course {
        code: "BTech",
        name: "Bachelor of Technology",
        years: &[
            Year {
                label: "1st Year",
                subjects: &[
                    Subject {
                        code: "Data Structures",
                        name: "Data Structures",
                        topics: DS_TOPICS,
                    },
                    Subject {
                        code: "Mathematics",
                        name: "Discrete Mathematics",
                        topics: &[
                            Topic::plain("Set Theory"),
                            Topic::plain("Logic"),
                            Topic::plain("Graph Theory"),
                            Topic::plain("Combinatorics"),
                            Topic::plain("Recurrence Relations"),
                        ],
                    },
                ],
            },
            Year {
                label: "2nd Year",
                subjects: &[
                    Subject {
                        code: "Algorithms",
                        name: "Design & Analysis of Algorithms",
                        topics: &[
                            Topic::plain("Divide & Conquer"),
                            Topic::plain("Dynamic Programming"),
                            Topic::plain("Greedy Algorithms"),
                            Topic::plain("NP Completeness"),
                            Topic::plain("Complexity Analysis"),
                        ],
                    },
                    Subject {
                        code: "Database",
                        name: "Database Systems",
                        topics: &[
                            Topic::plain("Relational Model"),
                            Topic::plain("SQL"),
                            Topic::plain("Normalization"),
                            Topic::plain("Indexing"),
                            Topic::plain("Query Optimization"),
                        ],
                    },
                ],
            },
            Year {
                label: "3rd Year",
                subjects: &[
                    Subject {
                        code: "AI",
                        name: "Artificial Intelligence",
                        topics: &[
                            Topic::plain("Search Algorithms"),
                            Topic::plain("Expert Systems"),
                            Topic::plain("Robotics"),
                            Topic::plain("Natural Language Processing"),
                            Topic::plain("Computer Vision"),
                        ],
                    },
                    Subject {
                        code: "SoftwareEngineering",
                        name: "Software Engineering",
                        topics: &[
                            Topic::plain("SDLC"),
                            Topic::plain("Design Patterns"),
                            Topic::plain("Testing"),
                            Topic::plain("DevOps"),
                            Topic::plain("Agile Methodology"),
                        ],
                    },
                ],
            },
        ],
    },
    Course {
        code: "MCA",
        name: "Master of Computer Applications",
        years: &[
            Year {
                label: "1st Year",
                subjects: &[
                    Subject {
                        code: "Advanced DBMS",
                        name: "Advanced Database Management System",
                        topics: &[
                            Topic::plain("Query Optimization"),
                            Topic::plain("Transaction Management"),
                            Topic::plain("Distributed Databases"),
                            Topic::plain("NoSQL"),
                            Topic::plain("Data Warehousing"),
                        ],
                    },
                    Subject {
                        code: "AdvancedOS",
                        name: "Advanced Operating System",
                        topics: &[
                            Topic::plain("Kernel Architecture"),
                            Topic::plain("Process Scheduling"),
                            Topic::plain("Memory Management"),
                            Topic::plain("I/O Systems"),
                            Topic::plain("Security"),
                        ],
                    },
                ],
            },
            Year {
                label: "2nd Year",
                subjects: &[
                    Subject {
                        code: "ML",
                        name: "Machine Learning",
                        topics: &[
                            Topic::plain("Supervised Learning"),
                            Topic::plain("Unsupervised Learning"),
                            Topic::plain("Reinforcement Learning"),
                            Topic::plain("Deep Learning"),
                            Topic::plain("NLP"),
                        ],
                    },
                    Subject {
                        code: "WebServices",
                        name: "Web Services & SOA",
                        topics: &[
                            Topic::plain("REST APIs"),
                            Topic::plain("SOAP"),
                            Topic::plain("Microservices"),
                            Topic::plain("Docker"),
                            Topic::plain("API Gateway"),
                        ],
                    },
                ],
            },
            Year {
                label: "3rd Year",
                subjects: &[
                    Subject {
                        code: "ResearchMethodology",
                        name: "Research Methodology",
                        topics: &[
                            Topic::plain("Research Design"),
                            Topic::plain("Data Collection"),
                            Topic::plain("Statistical Analysis"),
                            Topic::plain("Paper Writing"),
                            Topic::plain("Presentation Skills"),
                        ],
                    },
                    Subject {
                        code: "AdvancedAI",
                        name: "Advanced AI & Robotics",
                        topics: &[
                            Topic::plain("Deep Neural Networks"),
                            Topic::plain("Autonomous Systems"),
                            Topic::plain("Computer Vision"),
                            Topic::plain("Sensor Technology"),
                            Topic::plain("Embedded AI"),
                        ],
                    },
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(catalog().len(), 3);
        for course in catalog() {
            assert_eq!(course.years.len(), 3, "{} should have 3 years", course.code);
            for year in course.years {
                assert_eq!(year.subjects.len(), 2);
                for subject in year.subjects {
                    assert_eq!(subject.topics.len(), 5);
                }
            }
        }
    }

    #[test]
    fn test_lookup_chain() {
        let course = find_course("BCA").unwrap();
        let year = course.year("1st Year").unwrap();
        let subject = year.subject("DBMS").unwrap();
        let topic = subject.topic("SQL").unwrap();
        assert!(topic.narration.is_some());
        assert!(topic.video_url.is_some());
        assert!(subject.topic("Sharding").is_none());
    }

    #[test]
    fn test_unknown_course() {
        assert!(find_course("PhD").is_none());
    }
}
