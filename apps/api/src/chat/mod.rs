// Resume screening conversation.
// Implements: transcript, weights, scoring round, cutoff, invitations, and the
// controller that drives them. Collaborator calls go through `collaborators`.

pub mod controller;
pub mod cutoff;
pub mod handlers;
pub mod invitation;
pub mod messages;
pub mod scoring;
pub mod store;
pub mod transcript;
pub mod weights;
