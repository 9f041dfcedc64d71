//! Response-template generator - canned acknowledgement text per category.
//!
//! Three categories have hand-written templates; everything else, including
//! `other`, lands on the generic fallback. There is intentionally no
//! `default` entry in the table.

/// Render the acknowledgement sent back to the patient on intake.
pub fn acknowledgement(complaint_id: &str, patient_name: &str, category: &str) -> String {
    match category {
        "appointment_scheduling" => format!(
            "Dear {patient_name},\n\n\
             Thank you for letting us know about the scheduling problem \
             (reference {complaint_id}).\n\
             Our appointments desk is reviewing your booking and will contact \
             you with a corrected slot within one working day.\n\n\
             Hospital Patient Services"
        ),
        "doctor_behavior" => format!(
            "Dear {patient_name},\n\n\
             We are sorry to hear about your experience during your \
             consultation (reference {complaint_id}).\n\
             The matter has been forwarded to Medical Affairs for a \
             confidential review, and you will receive a follow-up from the \
             department head.\n\n\
             Hospital Patient Services"
        ),
        "billing_issues" => format!(
            "Dear {patient_name},\n\n\
             Thank you for raising the billing concern (reference \
             {complaint_id}).\n\
             The Billing Department is auditing the charges on your account; \
             if a correction or refund is due, it will be processed without \
             further action on your part.\n\n\
             Hospital Patient Services"
        ),
        _ => format!(
            "Dear {patient_name},\n\n\
             Thank you for your feedback (reference {complaint_id}).\n\
             Your complaint has been recorded and routed to the responsible \
             team, who will be in touch with you shortly.\n\n\
             Hospital Patient Services"
        ),
    }
}
