//! The shipped workshop catalog
//!
//! Single source of truth for the production workshop data. Copy
//! lives here as data, not in the presentation layer, so the forms
//! and the pages render from the same records.

use crate::WorkshopCatalog;
use registration_types::{
    ConfirmedGuest, CurrentOfferings, FormType, Instructor, LocalSchedule, LocalWorkshop,
    Methodology, MysteryGuest, Prerequisites, PrivateClassType, PrivateClasses,
    ProgressionSession, Skill, SummitWorkshop, TierId, TierSchedule, TierSelectionNote, TimeSlot,
    VisionMission, WorkshopConfig, WorkshopId, WorkshopTier,
};

impl WorkshopCatalog {
    /// The production catalog: the local circuit, the Hailey & Kollin
    /// summit, and the special-guest summit.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        // Registration order is display order; ids are unique by
        // construction so these cannot fail.
        for workshop in [local_circuit(), hailey_kollin_summit(), special_guest_summit()] {
            catalog
                .register(workshop)
                .unwrap_or_else(|e| panic!("builtin catalog is malformed: {e}"));
        }
        catalog
    }
}

fn local_circuit() -> WorkshopConfig {
    WorkshopConfig::Local(LocalWorkshop {
        id: WorkshopId::new("local"),
        active: true,
        title: "Local Circuit Workshops".into(),
        tagline: "How to Toss Higher".into(),
        current_focus: "Toss Hands & Toss Block Fundamentals".into(),
        schedule: LocalSchedule {
            frequency: "Bi-weekly".into(),
            time_slots: vec![
                TimeSlot {
                    time: "2:00 PM - 3:00 PM".into(),
                    focus: "Skill Session 1".into(),
                },
                TimeSlot {
                    time: "3:00 PM - 4:00 PM".into(),
                    focus: "Skill Session 2".into(),
                },
            ],
            format: "15-minute focused drills per skill".into(),
            philosophy: "Each session teaches drills you can take home and practice independently."
                .into(),
        },
        vision_mission: VisionMission {
            headline: "Our Approach to Skill Development".into(),
            introduction: "We believe in structured, progressive learning with clear entry \
                           points. Each workshop builds on the last, with realistic goals you \
                           can achieve and practice independently."
                .into(),
            methodology: Methodology {
                title: "Structured Progression".into(),
                description: "Rather than one-off workshops, we offer multi-session learning \
                              paths. Each session builds on the previous, creating a clear \
                              roadmap from beginner to advanced."
                    .into(),
                example_title: "Example: Toss Progression Path".into(),
                sessions: vec![
                    ProgressionSession {
                        number: 1,
                        title: "Foundations of a Toss".into(),
                        content: "Introduction to toss mechanics - drills and foundational \
                                  movements"
                            .into(),
                        prerequisite: "Open to all levels".into(),
                    },
                    ProgressionSession {
                        number: 2,
                        title: "How to Catch a Toss".into(),
                        content: "Body positioning and timing - balance and stability in the air"
                            .into(),
                        prerequisite: "Attended Session 1 or can perform basic toss prep".into(),
                    },
                    ProgressionSession {
                        number: 3,
                        title: "How to Toss Higher".into(),
                        content: "Explosive power and technique - achieving better height and \
                                  control"
                            .into(),
                        prerequisite: "Comfortable with basic tosses and catching".into(),
                    },
                    ProgressionSession {
                        number: 4,
                        title: "Advanced Toss Variations".into(),
                        content: "Full ups, kick fulls, and specialty tosses - refining technique"
                            .into(),
                        prerequisite: "Consistent with standard tosses".into(),
                    },
                ],
            },
            current_offerings: CurrentOfferings {
                title: "Current Workshop Focus".into(),
                skills: vec!["Toss Hands".into(), "Toss Block".into()],
                note: "Based on community interest, we adapt our workshop schedule to focus on \
                       the skills you want to learn most."
                    .into(),
            },
        },
        instructors: vec![
            Instructor {
                name: "TBD".into(),
                title: "Stunt Specialist".into(),
                photo: None,
                bio: None,
            },
            Instructor {
                name: "TBD".into(),
                title: "Stunt Specialist".into(),
                photo: None,
                bio: None,
            },
        ],
        form_type: FormType::Local,
        sheet_name: "Local_Workshops".into(),
        terms_url: "/terms/local-workshops".into(),
    })
}

fn hailey_kollin_summit() -> WorkshopConfig {
    WorkshopConfig::Summit(SummitWorkshop {
        id: WorkshopId::new("hailey-kollin"),
        active: true,
        title: "Hailey & Kollin Summit".into(),
        subtitle: "Team USA Elite In Malaysia".into(),
        date: "TBC 2026".into(),
        location: "Kuala Lumpur".into(),
        duration: Some("TBC".into()),
        tiers: vec![
            WorkshopTier {
                id: TierId::new("foundation"),
                name: "Foundation Tier".into(),
                tagline: "Build Elite-Level Basics".into(),
                description: "This tier focuses on building world-class fundamentals. Learn WHY \
                              USA has such incredible basics - it's not about hitting skills, \
                              it's about understanding technique, body awareness, and proper \
                              form. Expect to refine your foundation and develop a deeper \
                              understanding of skill execution."
                    .into(),
                skills: vec![
                    Skill::new("Toss Hands", "Foundational"),
                    Skill::new("Toss Block", "Foundational"),
                    Skill::new("Full Up / Any Full Skills", "Foundational"),
                    Skill::new("Hand Hand", "Foundational"),
                ],
                philosophy: "Technique over repetition. Form over flash. Understanding over \
                             execution."
                    .into(),
                prerequisites: Prerequisites {
                    required: vec![],
                    recommended: "Willingness to learn and refine fundamentals, regardless of \
                                  current skill level"
                        .into(),
                    note: "This tier is open to all levels. Whether you're new to these skills \
                           or have been doing them for years, you'll gain insight into \
                           elite-level technique."
                        .into(),
                },
                schedule: TierSchedule {
                    day1: "Skill introduction & fundamentals".into(),
                    day2: "Refinement & repetition".into(),
                },
            },
            WorkshopTier {
                id: TierId::new("elite"),
                name: "Elite Tier".into(),
                tagline: "Advanced Technique Mastery".into(),
                description: "This tier is designed for athletes ready to push their limits. \
                              Focus on high-level skills, advanced technique work, and building \
                              consistency in complex movements. Expect intensive drills, \
                              detailed feedback, and progression toward mastery."
                    .into(),
                skills: vec![
                    Skill::new("Rewind (Basic)", "Advanced"),
                    Skill::new("Fronthand Up Cupie Fronthand Full", "Advanced"),
                    Skill::new("Handski", "Advanced"),
                    Skill::new("1 Arm Rewinds", "Elite"),
                ],
                philosophy: "Precision, power, and control. Building consistency in advanced \
                             movements."
                    .into(),
                prerequisites: Prerequisites {
                    required: vec!["Hand Hand Extension".into(), "Fronthand Up".into()],
                    recommended: "Strong body awareness and comfort with advanced stunting".into(),
                    note: "Participants are expected to have the listed prerequisites before \
                           attending. If you're not quite there yet, we encourage you to join \
                           Foundation Tier or work on these skills and attend future summits. \
                           Understanding the risks of attending without meeting prerequisites \
                           is your responsibility."
                        .into(),
                },
                schedule: TierSchedule {
                    day1: "Advanced skill introduction & technique breakdown".into(),
                    day2: "Refinement, consistency, and pushing limits".into(),
                },
            },
        ],
        tier_selection_note: Some(TierSelectionNote {
            both_tiers: "Selecting both tiers means you're committing to attend BOTH workshops, \
                         not choosing between them. You'll receive details for both Foundation \
                         and Elite sessions."
                .into(),
            encouragement: "Choose the tier(s) that align with your current skill level and \
                            goals. There's no wrong choice - both tiers offer incredible value."
                .into(),
        }),
        private_classes: Some(PrivateClasses {
            available: true,
            headline: "Private Coaching with Hailey & Kollin".into(),
            description: "Get personalized, one-on-one (or paired) coaching directly from \
                          Hailey and Kollin. Limited availability."
                .into(),
            types: vec![
                PrivateClassType {
                    id: "1-on-1".into(),
                    name: "1-on-1 Coaching".into(),
                    description: "Individual attention focused on your specific goals and skills"
                        .into(),
                },
                PrivateClassType {
                    id: "2-on-1".into(),
                    name: "2-on-1 (Flyer & Base Pair)".into(),
                    description: "Partner coaching for flyer/base pairs to build chemistry and \
                                  technique"
                        .into(),
                },
            ],
            schedule: "Weekdays only".into(),
            availability: "First-come, first-serve time slots".into(),
            pricing_note: "Premium pricing applies. Details provided upon inquiry.".into(),
            limitations: "Extremely limited availability - register interest early to secure \
                          your spot."
                .into(),
        }),
        early_bird_message: Some(
            "Don't miss out on our early bird discounts! Register your interest now to be \
             notified when pricing drops and early bird slots open up."
                .into(),
        ),
        confirmed: None,
        mystery_guests: Vec::new(),
        suspense_message: None,
        form_type: FormType::TieredSummit,
        sheet_name: "Hailey_Kollin_Summit".into(),
        terms_url: "/terms/international-summit".into(),
    })
}

fn special_guest_summit() -> WorkshopConfig {
    WorkshopConfig::Summit(SummitWorkshop {
        id: WorkshopId::new("coming-soon"),
        active: true,
        title: "Special Guest Summit".into(),
        subtitle: "International Elite Coaching".into(),
        date: "Sept/Oct 2026".into(),
        location: "Kuala Lumpur".into(),
        duration: None,
        tiers: Vec::new(),
        tier_selection_note: None,
        private_classes: None,
        early_bird_message: None,
        confirmed: Some(ConfirmedGuest {
            name: "Daniel Bailey".into(),
            country: "Australia".into(),
            flag: "\u{1F1E6}\u{1F1FA}".into(),
            team: "ex Weber State University".into(),
            team_note: "Weber State University is recognized as one of the world's strongest \
                        university cheer teams."
                .into(),
            bio: "Elite athlete with world-class experience from the strongest university \
                  cheer program globally. Daniel brings high-level technique and training \
                  methodology honed at the top tier of competitive cheerleading."
                .into(),
            photo: None,
            skills: Vec::new(),
        }),
        mystery_guests: vec![
            MysteryGuest {
                silhouette: true,
                hint: "Elite International Coach".into(),
                photo: None,
                revealed: false,
            },
            MysteryGuest {
                silhouette: true,
                hint: "World Champion Athlete".into(),
                photo: None,
                revealed: false,
            },
        ],
        suspense_message: Some(
            "We're bringing more elite talent to Malaysia. Stay tuned for reveals...".into(),
        ),
        form_type: FormType::GenericSummit,
        sheet_name: "Special_Guest_Summit".into(),
        terms_url: "/terms/international-summit".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = WorkshopCatalog::builtin();
        assert_eq!(catalog.len(), 3);

        let ids: Vec<_> = catalog
            .list_active()
            .iter()
            .map(|w| w.id().as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["local", "hailey-kollin", "coming-soon"]);

        let summits = catalog.summits();
        assert_eq!(summits.len(), 2);
        assert_eq!(summits[0].id.as_str(), "hailey-kollin");
    }

    #[test]
    fn test_hailey_kollin_has_two_tiers_with_note() {
        let catalog = WorkshopCatalog::builtin();
        let summit = catalog
            .get(&WorkshopId::new("hailey-kollin"))
            .and_then(WorkshopConfig::as_summit)
            .unwrap();

        assert_eq!(summit.tier_count(), 2);
        assert_eq!(summit.tiers[0].id, TierId::new("foundation"));
        assert_eq!(summit.tiers[1].id, TierId::new("elite"));
        assert!(summit.tier_selection_note.is_some());
        assert_eq!(summit.form_type, FormType::TieredSummit);

        // Foundation is open to all; Elite carries hard prerequisites.
        assert!(summit.tiers[0].prerequisites.open_to_all());
        assert!(!summit.tiers[1].prerequisites.open_to_all());
    }

    #[test]
    fn test_special_guest_summit_guests() {
        let catalog = WorkshopCatalog::builtin();
        let summit = catalog
            .get(&WorkshopId::new("coming-soon"))
            .and_then(WorkshopConfig::as_summit)
            .unwrap();

        assert!(summit.confirmed.is_some());
        assert_eq!(summit.mystery_guests.len(), 2);
        assert!(summit.mystery_guests.iter().all(|g| !g.revealed));
        assert!(summit.tiers.is_empty());
    }
}
