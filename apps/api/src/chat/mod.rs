// Turn-based hiring-assistant chat. The client keeps the running transcript
// and posts the whole thing each turn.

pub mod handlers;
