use crate::constraint::DistanceConstraint;
use crate::particle::Particle;
use crate::V3;

pub struct Model {
	pub particles: Vec<Particle>,
	pub constraints: Vec<DistanceConstraint>,
	pub gravity: f32,
	pub friction: f32,
	pub iterations: usize,
	pub tear_distance: f32,
}

impl Default for Model {
	fn default() -> Self {
		Self {
			particles: Vec::new(),
			constraints: Vec::new(),
			gravity: 0.2,
			friction: 0.99,
			iterations: 5,
			tear_distance: 120.0,
		}
	}
}

impl Model {
	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_friction(mut self, friction: f32) -> Self {
		self.friction = friction;
		self
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_tear_distance(mut self, tear_distance: f32) -> Self {
		self.tear_distance = tear_distance;
		self
	}

	pub fn create_particle(
		&mut self,
		x: f32,
		y: f32,
		z: f32,
		lock: bool,
	) -> usize {
		self.particles.push(Particle::new(V3::new(x, y, z), lock));
		self.particles.len() - 1
	}

	// rest length is the current distance, call once the endpoints sit
	// in their rest configuration
	pub fn create_constraint(&mut self, f: usize, s: usize) {
		self.constraints
			.push(DistanceConstraint::new(&self.particles, f, s));
	}

	// all pairs scan, i < c, each unordered pair considered once
	pub fn create_constraints_within(&mut self, distance: f32) {
		for i in 0..self.particles.len() {
			for c in i + 1..self.particles.len() {
				let d = (self.particles[i].pos - self.particles[c].pos)
					.magnitude();
				if d < distance {
					self.create_constraint(i, c);
				}
			}
		}
	}

	// drop every constraint attached to one particle
	pub fn cut_particle(&mut self, id: usize) {
		self.constraints.retain(|c| !c.touches(id));
	}

	pub fn integrate(&mut self) {
		for p in self.particles.iter_mut() {
			p.update(self.friction, self.gravity);
		}
	}

	// iterations passes over the live set. retain gives each pass a
	// well defined single visit per constraint and compacts removals
	// in place, so a tear never shifts an unvisited neighbour.
	pub fn solve_constraints(&mut self) {
		let tear = self.tear_distance;
		for _ in 0..self.iterations {
			let particles = &mut self.particles;
			self.constraints.retain(|c| c.relax(particles) <= tear);
		}
	}

	pub fn update_frame(&mut self) {
		self.integrate();
		self.solve_constraints();
	}
}
