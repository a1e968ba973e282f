use super::{RenderedEmail, escape, multiline, subject_line, submitted_at};
use crate::configuration::HospitalSettings;
use crate::models::contact::ContactRecord;
use crate::models::submission::Submission;

pub fn admin(submission: &Submission<ContactRecord>) -> RenderedEmail {
    let c = &submission.fields;
    let html = format!(
        r#"<h2>New Contact Form Submission</h2>
<p><strong>Reference:</strong> {id}</p>
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Phone:</strong> {phone}</p>
<p><strong>Subject:</strong> {subject}</p>
<p><strong>Message:</strong></p>
<p>{message}</p>
<p><strong>Submitted At:</strong> {at}</p>"#,
        id = escape(&submission.id),
        name = escape(&c.name),
        email = escape(&c.email),
        phone = c.phone.as_deref().map(escape).unwrap_or_else(|| "N/A".to_string()),
        subject = escape(&c.subject),
        message = multiline(&c.message),
        at = submitted_at(&submission.created_at),
    );

    RenderedEmail {
        subject: subject_line(&format!("Contact Form: {}", c.subject)),
        html,
    }
}

pub fn user(submission: &Submission<ContactRecord>, hospital: &HospitalSettings) -> RenderedEmail {
    let c = &submission.fields;
    let html = format!(
        r#"<h2>Thank you for contacting us!</h2>
<p>Dear {name},</p>
<p>We have received your message and will get back to you within 24 hours.</p>
<p><strong>Your Message:</strong></p>
<p>{message}</p>
<br>
<p>Best regards,<br>{hospital} Team</p>
<p style="font-size: 12px; color: #666;">{address} &middot; {phone}</p>"#,
        name = escape(&c.name),
        message = multiline(&c.message),
        hospital = escape(&hospital.name),
        address = escape(&hospital.address),
        phone = escape(&hospital.phone),
    );

    RenderedEmail {
        subject: subject_line(&format!("Thank you for contacting {}", hospital.name)),
        html,
    }
}
