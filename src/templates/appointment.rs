use chrono::Datelike;

use super::{RenderedEmail, detail_row, escape, multiline, subject_line, submitted_at};
use crate::configuration::HospitalSettings;
use crate::models::appointment::AppointmentRecord;
use crate::models::submission::Submission;

pub fn admin(submission: &Submission<AppointmentRecord>) -> RenderedEmail {
    let a = &submission.fields;
    let reason = a.reason.as_deref().map(multiline).unwrap_or_else(|| "N/A".to_string());

    let html = format!(
        r#"<h2>New Appointment Booking</h2>
<p><strong>Reference:</strong> {id}</p>
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Age:</strong> {age}</p>
<p><strong>Phone:</strong> {phone}</p>
<p><strong>Gender:</strong> {gender}</p>
<p><strong>Department:</strong> {department}</p>
<p><strong>Doctor:</strong> {doctor}</p>
<p><strong>Date:</strong> {date}</p>
<p><strong>Time:</strong> {time}</p>
<p><strong>Reason:</strong> {reason}</p>
<p><strong>Submitted At:</strong> {at}</p>"#,
        id = escape(&submission.id),
        name = escape(&a.name),
        email = escape(&a.email),
        age = a.age,
        phone = escape(&a.phone),
        gender = escape(&a.gender),
        department = escape(&a.department),
        doctor = escape(&a.doctor),
        date = escape(&a.date),
        time = escape(&a.time),
        at = submitted_at(&submission.created_at),
    );

    RenderedEmail {
        subject: "New Appointment Booking".to_string(),
        html,
    }
}

pub fn patient(
    submission: &Submission<AppointmentRecord>,
    hospital: &HospitalSettings,
) -> RenderedEmail {
    let a = &submission.fields;
    let hospital_name = escape(&hospital.name);
    let details = [
        detail_row("Doctor", &escape(&a.doctor)),
        detail_row("Date", &escape(&a.date)),
        detail_row("Time", &escape(&a.time)),
        detail_row("Department", &escape(&a.department)),
    ]
    .concat();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; background-color: #f5f7fa; padding: 0; margin: 0;">
  <table width="100%" cellpadding="0" cellspacing="0" role="presentation" style="max-width: 600px; margin: auto; background: #ffffff; border-radius: 8px;">
    <tr><td style="background: #004a99; padding: 16px 24px; color: #ffffff; font-size: 24px; font-weight: 700;">{hospital_name}</td></tr>
    <tr>
      <td style="padding: 24px; color: #1f2d3d;">
        <h2 style="margin-top: 0; font-size: 22px; color: #0f254e;">Thank you for booking an appointment at {hospital_name}</h2>
        <p>Dear {name},</p>
        <p>Your appointment has been received and is currently <strong>pending confirmation</strong>. Here are the details:</p>
        <table cellpadding="0" cellspacing="0" style="width: 100%; border-collapse: collapse; margin: 16px 0;">{details}</table>
        <p>We will contact you shortly to confirm your booking.</p>
        <p style="margin: 24px 0 0; font-size: 14px; color: #555;">Best regards,<br /><strong>{hospital_name}</strong></p>
      </td>
    </tr>
    <tr>
      <td style="background: #f0f4f9; padding: 16px 24px; font-size: 12px; color: #666;">
        <div><strong>Address:</strong> {address}</div>
        <div><strong>For any queries, call:</strong> {phone}</div>
        <div>This is an automated message. Please do not reply to this email.</div>
        <div style="font-size: 11px; color: #999;">&copy; {year} {hospital_name}. All rights reserved.</div>
      </td>
    </tr>
  </table>
</div>"#,
        name = escape(&a.name),
        address = escape(&hospital.address),
        phone = escape(&hospital.phone),
        year = submission.created_at.year(),
    );

    RenderedEmail {
        subject: subject_line(&format!(
            "Appointment Confirmation - {} Department",
            a.department
        )),
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::SubmissionStatus;
    use chrono::Utc;

    fn submission() -> Submission<AppointmentRecord> {
        Submission {
            id: "appt-1".to_string(),
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
            fields: AppointmentRecord {
                name: "Asha <Rao>".to_string(),
                email: "asha@example.com".to_string(),
                phone: "9876543210".to_string(),
                age: 34,
                gender: "F".to_string(),
                department: "Cardiology".to_string(),
                doctor: "Dr. Mehta".to_string(),
                date: "2025-03-01".to_string(),
                time: "10:00".to_string(),
                reason: Some("Chest pain\nsince Monday".to_string()),
            },
        }
    }

    #[test]
    fn test_admin_view_lists_every_field() {
        let email = admin(&submission());
        assert_eq!(email.subject, "New Appointment Booking");
        for needle in ["appt-1", "Asha &lt;Rao&gt;", "34", "Dr. Mehta", "Chest pain<br>since Monday"] {
            assert!(email.html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_admin_view_without_reason() {
        let mut s = submission();
        s.fields.reason = None;
        assert!(admin(&s).html.contains("<strong>Reason:</strong> N/A"));
    }

    #[test]
    fn test_patient_view_uses_branding() {
        let hospital = HospitalSettings {
            name: "Riverside Clinic".to_string(),
            ..HospitalSettings::default()
        };
        let email = patient(&submission(), &hospital);
        assert_eq!(email.subject, "Appointment Confirmation - Cardiology Department");
        assert!(email.html.contains("Riverside Clinic"));
        assert!(email.html.contains("Dear Asha &lt;Rao&gt;"));
        assert!(email.html.contains("pending confirmation"));
    }
}
