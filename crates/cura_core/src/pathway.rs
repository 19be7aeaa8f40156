//! crates/cura_core/src/pathway.rs
//!
//! The severity-to-care-pathway table and the two decisions that hang off a
//! pathway: which recommendation reply to send, and whether to list doctors.
//!
//! Both decisions exist twice. The free functions [`reply_kind_for`] and
//! [`surfaces_doctors`] match substrings of the pathway text exactly as the
//! web prototype did, and are what the presentation layer may call on any
//! pathway string. The [`Pathway`] methods answer the same questions from the
//! enum. The tests pin the two to each other, including the Emergency Care
//! case where no doctors are listed.

use serde::Serialize;

/// One of the five fixed care recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pathway {
    EmergencyCare,
    UrgentCare,
    DoctorVisit,
    PharmacistConsultation,
    SelfCareMonitoring,
}

/// Which template the recommendation reply uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    SelfCare,
    Pharmacist,
    DoctorSearch,
    Generic,
}

impl Pathway {
    /// Maps a severity score to a pathway. Evaluated top-down, first match wins.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 8 => Pathway::EmergencyCare,
            7 => Pathway::UrgentCare,
            5 | 6 => Pathway::DoctorVisit,
            3 | 4 => Pathway::PharmacistConsultation,
            _ => Pathway::SelfCareMonitoring,
        }
    }

    /// The short category name, e.g. `Doctor Visit`.
    pub fn label(self) -> &'static str {
        match self {
            Pathway::EmergencyCare => "Emergency Care",
            Pathway::UrgentCare => "Urgent Care",
            Pathway::DoctorVisit => "Doctor Visit",
            Pathway::PharmacistConsultation => "Pharmacist Consultation",
            Pathway::SelfCareMonitoring => "Self-Care Monitoring",
        }
    }

    /// The full recommendation, label followed by the advice sentence.
    pub fn description(self) -> &'static str {
        match self {
            Pathway::EmergencyCare => "Emergency Care - Your symptoms seem severe. Please consider visiting an emergency room or calling emergency services immediately.",
            Pathway::UrgentCare => "Urgent Care - I recommend seeking urgent medical attention. Consider visiting an urgent care clinic or calling your doctor today.",
            Pathway::DoctorVisit => "Doctor Visit - I recommend scheduling an appointment with your doctor as soon as possible.",
            Pathway::PharmacistConsultation => "Pharmacist Consultation - Consider speaking with a pharmacist who can provide guidance and recommend over-the-counter options.",
            Pathway::SelfCareMonitoring => "Self-Care Monitoring - Your symptoms appear mild. Monitor them closely and try gentle self-care measures.",
        }
    }

    pub fn reply_kind(self) -> ReplyKind {
        match self {
            Pathway::SelfCareMonitoring => ReplyKind::SelfCare,
            Pathway::PharmacistConsultation => ReplyKind::Pharmacist,
            Pathway::DoctorVisit | Pathway::UrgentCare => ReplyKind::DoctorSearch,
            // No trigger word in the emergency text, so it falls through.
            Pathway::EmergencyCare => ReplyKind::Generic,
        }
    }

    /// Whether the doctor listing is shown under this pathway.
    ///
    /// Emergency Care returns `false`: its text names none of the trigger words.
    pub fn surfaces_doctors(self) -> bool {
        matches!(self, Pathway::DoctorVisit | Pathway::UrgentCare)
    }

    /// The assistant's final reply for this pathway.
    pub fn recommendation_reply(self) -> String {
        compose_reply(self.reply_kind(), self.description())
    }
}

/// Picks the reply template by substring match on the pathway text.
pub fn reply_kind_for(pathway_text: &str) -> ReplyKind {
    let text = pathway_text.to_lowercase();
    if text.contains("self-care") {
        ReplyKind::SelfCare
    } else if text.contains("pharmacist") {
        ReplyKind::Pharmacist
    } else if text.contains("doctor") || text.contains("urgent care") {
        ReplyKind::DoctorSearch
    } else {
        ReplyKind::Generic
    }
}

/// The doctor-listing gate, evaluated on the pathway text (case-insensitive).
pub fn surfaces_doctors(pathway_text: &str) -> bool {
    let text = pathway_text.to_lowercase();
    text.contains("doctor") || text.contains("physician") || text.contains("urgent care")
}

/// Renders the recommendation reply for an arbitrary pathway text.
pub fn recommendation_reply(pathway_text: &str) -> String {
    compose_reply(reply_kind_for(pathway_text), pathway_text)
}

fn compose_reply(kind: ReplyKind, pathway_text: &str) -> String {
    let opening = format!("Based on what you've shared, here's my recommendation: {pathway_text}");
    match kind {
        ReplyKind::SelfCare | ReplyKind::Generic => format!(
            "{opening}\n\nI've prepared a summary of our conversation that you can review."
        ),
        ReplyKind::Pharmacist => format!(
            "{opening}\n\nNote: You may wish to consult a pharmacist for further advice.\n\nI've prepared a summary of our conversation that you can review."
        ),
        ReplyKind::DoctorSearch => format!(
            "{opening}\n\nI've prepared a summary and found nearby doctors who can help. Would you like to book an appointment?"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Pathway; 5] = [
        Pathway::EmergencyCare,
        Pathway::UrgentCare,
        Pathway::DoctorVisit,
        Pathway::PharmacistConsultation,
        Pathway::SelfCareMonitoring,
    ];

    #[test]
    fn score_boundaries_follow_the_table() {
        let expected = [
            (0, Pathway::SelfCareMonitoring),
            (2, Pathway::SelfCareMonitoring),
            (3, Pathway::PharmacistConsultation),
            (4, Pathway::PharmacistConsultation),
            (5, Pathway::DoctorVisit),
            (6, Pathway::DoctorVisit),
            (7, Pathway::UrgentCare),
            (8, Pathway::EmergencyCare),
            (10, Pathway::EmergencyCare),
        ];
        for (score, pathway) in expected {
            assert_eq!(Pathway::from_score(score), pathway, "score {score}");
        }
    }

    #[test]
    fn description_starts_with_label() {
        for pathway in ALL {
            assert!(pathway.description().starts_with(pathway.label()));
        }
    }

    #[test]
    fn enum_decisions_agree_with_text_matching() {
        for pathway in ALL {
            assert_eq!(pathway.reply_kind(), reply_kind_for(pathway.description()));
            assert_eq!(pathway.surfaces_doctors(), surfaces_doctors(pathway.description()));
            assert_eq!(
                pathway.recommendation_reply(),
                recommendation_reply(pathway.description())
            );
        }
    }

    #[test]
    fn doctor_gate_examples() {
        assert!(surfaces_doctors(Pathway::DoctorVisit.description()));
        assert!(surfaces_doctors(Pathway::UrgentCare.description()));
        assert!(!surfaces_doctors(Pathway::SelfCareMonitoring.description()));
        assert!(!surfaces_doctors(Pathway::PharmacistConsultation.description()));
        // Emergency Care never lists doctors.
        assert!(!surfaces_doctors(Pathway::EmergencyCare.description()));
        assert!(surfaces_doctors("See a PHYSICIAN soon"));
    }

    #[test]
    fn doctor_and_urgent_care_text_matches_doctor_search_once() {
        let reply = recommendation_reply("Urgent care - call your doctor");
        assert_eq!(reply.matches("found nearby doctors").count(), 1);
    }

    #[test]
    fn pharmacist_reply_carries_the_note() {
        let reply = Pathway::PharmacistConsultation.recommendation_reply();
        assert!(reply.contains("Note: You may wish to consult a pharmacist"));
        assert!(reply.ends_with("that you can review."));
    }

    #[test]
    fn emergency_reply_is_generic() {
        assert_eq!(Pathway::EmergencyCare.reply_kind(), ReplyKind::Generic);
        assert!(!Pathway::EmergencyCare
            .recommendation_reply()
            .contains("book an appointment"));
    }
}
