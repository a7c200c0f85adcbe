pub mod booking_form;
pub mod review_section;
