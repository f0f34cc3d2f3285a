mod collision_box;
mod collision_detector;
mod contact;
mod contact_solver;

pub use self::collision_box::CollisionBox;
pub use self::collision_detector::{CollisionDetector, RESTING_CONTACTS_PER_BOX};
pub use self::contact::{Contact, CollisionData};
pub use self::contact_solver::{ContactResolver, SequentialImpulseResolver};
