use chrono::Datelike;

use super::{RenderedEmail, detail_row, escape, multiline, subject_line, submitted_at};
use crate::configuration::HospitalSettings;
use crate::models::health_package::HealthPackageRecord;
use crate::models::submission::Submission;

pub fn admin(submission: &Submission<HealthPackageRecord>) -> RenderedEmail {
    let p = &submission.fields;
    let rows = [
        detail_row("Package", &escape(p.package_label())),
        detail_row("Name", &escape(&p.name)),
        detail_row("Email", &escape(&p.email)),
        detail_row("Mobile", &escape(&p.mobile)),
        detail_row("Preferred Date", &escape(&p.date)),
        detail_row(
            "Message",
            &p.message.as_deref().map(multiline).unwrap_or_else(|| "N/A".to_string()),
        ),
    ]
    .concat();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; background: #f8f9fa; padding: 20px;">
  <div style="background: #004a99; color: white; padding: 20px; border-radius: 8px 8px 0 0;">
    <h2 style="margin: 0;">New Health Package Inquiry</h2>
  </div>
  <div style="background: white; padding: 20px; border-radius: 0 0 8px 8px;">
    <table style="width: 100%; border-collapse: collapse;">{rows}</table>
    <div style="margin-top: 20px; padding: 15px; background: #e3f2fd; border-radius: 5px;">
      <p style="margin: 0; color: #1565c0;"><strong>Reference:</strong> {id}</p>
      <p style="margin: 5px 0 0 0; color: #1565c0;"><strong>Submitted At:</strong> {at}</p>
      <p style="margin: 5px 0 0 0; color: #1565c0;"><strong>Status:</strong> New</p>
    </div>
  </div>
</div>"#,
        id = escape(&submission.id),
        at = submitted_at(&submission.created_at),
    );

    RenderedEmail {
        subject: subject_line(&format!("New Health Package Inquiry - {}", p.package_label())),
        html,
    }
}

pub fn user(
    submission: &Submission<HealthPackageRecord>,
    hospital: &HospitalSettings,
) -> RenderedEmail {
    let p = &submission.fields;
    let hospital_name = escape(&hospital.name);

    let mut rows = String::new();
    if let Some(package) = &p.package_name {
        rows.push_str(&detail_row("Package", &escape(package)));
    }
    rows.push_str(&detail_row("Preferred Date", &escape(&p.date)));
    rows.push_str(&detail_row("Mobile", &escape(&p.mobile)));

    let message = p
        .message
        .as_deref()
        .map(|m| {
            format!(
                r#"<div style="margin-top: 12px;"><strong>Your Message:</strong><div style="background: #ffffff; padding: 12px; border: 1px solid #e1e5ea;">{}</div></div>"#,
                multiline(m)
            )
        })
        .unwrap_or_default();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; background-color: #f5f7fa;">
  <table width="100%" cellpadding="0" cellspacing="0" role="presentation" style="max-width: 600px; margin: auto; background: #ffffff; border-radius: 8px;">
    <tr><td style="background: #004a99; padding: 16px 24px; color: #ffffff; font-size: 24px; font-weight: 700;">{hospital_name}</td></tr>
    <tr>
      <td style="padding: 24px; color: #1f2d3d;">
        <h2 style="margin-top: 0; font-size: 22px; color: #0f254e;">Thank you for your health package inquiry!</h2>
        <p>Dear {name},</p>
        <p>We have received your inquiry for our health packages and will get back to you within 24 hours.</p>
        <div style="background: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
          <h4 style="margin: 0 0 12px 0; color: #374151;">Inquiry Details:</h4>
          <table cellpadding="0" cellspacing="0" style="width: 100%; border-collapse: collapse;">{rows}</table>
          {message}
        </div>
        <div style="background: #dbeafe; border-left: 4px solid #3b82f6; padding: 16px; margin: 20px 0;">
          <p style="margin: 0; color: #1e40af;">Our team will contact you shortly to discuss the health package details and schedule your appointment.</p>
        </div>
        <p style="margin: 24px 0 0; font-size: 14px; color: #555;">Best regards,<br /><strong>{hospital_name} Team</strong></p>
      </td>
    </tr>
    <tr>
      <td style="background: #f0f4f9; padding: 16px 24px; font-size: 12px; color: #666;">
        <div><strong>Address:</strong> {address}</div>
        <div><strong>For queries:</strong> {phone}</div>
        <div>This is an automated message. Please do not reply to this email.</div>
        <div style="font-size: 11px; color: #999;">&copy; {year} {hospital_name}. All rights reserved.</div>
      </td>
    </tr>
  </table>
</div>"#,
        name = escape(&p.name),
        address = escape(&hospital.address),
        phone = escape(&hospital.phone),
        year = submission.created_at.year(),
    );

    RenderedEmail {
        subject: subject_line(&format!(
            "Health Package Inquiry Received - {}",
            p.package_label()
        )),
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::SubmissionStatus;
    use chrono::Utc;

    fn submission(package_name: Option<&str>, message: Option<&str>) -> Submission<HealthPackageRecord> {
        Submission {
            id: "inq-1".to_string(),
            status: SubmissionStatus::New,
            created_at: Utc::now(),
            fields: HealthPackageRecord {
                name: "Meera".to_string(),
                email: "meera@example.com".to_string(),
                mobile: "9123456780".to_string(),
                date: "2025-04-12".to_string(),
                message: message.map(str::to_string),
                package_name: package_name.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_admin_subject_falls_back_to_general() {
        let email = admin(&submission(None, None));
        assert_eq!(email.subject, "New Health Package Inquiry - General");
        assert!(email.html.contains(&detail_row("Package", "General")));
        assert!(email.html.contains("inq-1"));
    }

    #[test]
    fn test_user_view_omits_absent_sections() {
        let email = user(&submission(None, None), &HospitalSettings::default());
        assert_eq!(email.subject, "Health Package Inquiry Received - General");
        assert!(!email.html.contains("Your Message"));
        assert!(!email.html.contains("<strong>Package:</strong>"));
    }

    #[test]
    fn test_user_view_includes_package_and_message() {
        let email = user(
            &submission(Some("Cardiac Care"), Some("Fasting?\nThanks")),
            &HospitalSettings::default(),
        );
        assert_eq!(email.subject, "Health Package Inquiry Received - Cardiac Care");
        assert!(email.html.contains("<strong>Package:</strong>"));
        assert!(email.html.contains("Fasting?<br>Thanks"));
    }
}
