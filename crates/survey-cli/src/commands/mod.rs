pub mod dispatch;
mod question;
mod serve;
mod survey;
