use crate::models::EmailTemplate;

/// The three automation templates, with the brand name and study-guide
/// link substituted in. Fixed content; no store access.
pub fn built_in(brand: &str, study_guide_url: &str) -> Vec<EmailTemplate> {
    vec![
        EmailTemplate {
            key: "welcome".to_string(),
            subject: format!("Welcome to {brand}! Your Path to Safe, Confident Driving"),
            html: format!(
                "<h2>Welcome to {brand}!</h2>\n\
                 <p>We're excited to help you become a safe, confident driver. You can book or manage your lessons anytime on our website.</p>\n\
                 <p>Before your first lesson, spend 10 minutes reviewing your <a href='{study_guide_url}'>study guide</a> modules to maximize your time in the car.</p>\n\
                 <p>Questions? Just reply to this email. We're here to help!</p>\n\
                 <p>— The {brand} Team</p>"
            ),
        },
        EmailTemplate {
            key: "booking_confirmation".to_string(),
            subject: format!("{brand}: Your Driving Lesson is Confirmed"),
            html: format!(
                "<h2>Your lesson is confirmed!</h2>\n\
                 <p>Thank you for booking with {brand}. You'll receive a reminder 24 hours before your lesson.</p>\n\
                 <p>Bring your permit/license and wear comfortable shoes. Review your <a href='{study_guide_url}'>study guide</a> module beforehand.</p>\n\
                 <p>Need to reschedule? Use the link in your confirmation or contact support.</p>"
            ),
        },
        EmailTemplate {
            key: "post_lesson".to_string(),
            subject: format!("{brand}: Great work today — review your evaluation"),
            html: format!(
                "<h2>Great job behind the wheel!</h2>\n\
                 <p>Your instructor has submitted your evaluation. Log in to review your progress and next steps.</p>\n\
                 <p><a href='{study_guide_url}'>Access your evaluation</a></p>\n\
                 <p>Keep practicing and see you soon!</p>"
            ),
        },
    ]
}
