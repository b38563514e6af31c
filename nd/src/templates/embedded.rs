//! Embedded plan templates
//!
//! These are compiled into the binary and used when no override file exists.
//! Each template receives `request` (the caller's text, verbatim) and
//! `category` (the display name).

/// Business strategy plan
pub const BUSINESS: &str = r#"# 📊 Business Strategy Plan

## 🎯 Executive Summary
This comprehensive business plan addresses: "{{request}}"

## 📈 Market Analysis & Strategy

### Phase 1: Research & Validation (Weeks 1-2)
1. **Market Research**
   - Analyze target market size and demographics
   - Study competitor landscape and positioning
   - Identify market gaps and opportunities
   - Conduct customer interviews and surveys

2. **Business Model Validation**
   - Define value proposition clearly
   - Test assumptions with potential customers
   - Validate pricing strategy
   - Assess revenue potential

### Phase 2: Planning & Preparation (Weeks 3-4)
3. **Strategic Planning**
   - Develop detailed business model canvas
   - Create financial projections and budgets
   - Plan marketing and sales strategies
   - Design operational processes

4. **Resource Preparation**
   - Secure initial funding or investment
   - Build core team and partnerships
   - Set up legal structure and compliance
   - Develop minimum viable product (MVP)

### Phase 3: Launch & Growth (Weeks 5-12)
5. **Market Entry**
   - Execute soft launch with beta customers
   - Gather feedback and iterate quickly
   - Implement marketing campaigns
   - Build brand awareness and credibility

6. **Scale & Optimize**
   - Monitor key performance indicators (KPIs)
   - Optimize operations for efficiency
   - Expand customer base strategically
   - Plan for sustainable growth

## 💰 Financial Projections
- **Initial Investment**: $10,000 - $50,000
- **Break-even Timeline**: 6-9 months
- **Revenue Target Year 1**: $100,000+

## 🚀 Success Metrics
- Customer acquisition cost (CAC)
- Monthly recurring revenue (MRR)
- Customer lifetime value (CLV)
- Market share growth

## ⚠️ Risk Management
- **Market Risks**: Economic downturns, competition
- **Operational Risks**: Team scalability, supply chain
- **Financial Risks**: Cash flow, funding gaps
- **Mitigation**: Diversification, contingency planning

## 🎯 Next Immediate Actions
1. Start market research this week
2. Create customer persona profiles
3. Develop MVP specifications
4. Set up tracking systems for metrics

*This plan is designed to be adaptive - review and adjust monthly based on market feedback and performance data.*
"#;

/// Learning plan
pub const LEARNING: &str = r#"# 📚 Comprehensive Learning Plan

## 🎯 Learning Objectives
Master the skills outlined in: "{{request}}"

## 📖 Structured Learning Path

### Phase 1: Foundation Building (Weeks 1-2)
1. **Knowledge Assessment**
   - Take initial skill assessment test
   - Identify current knowledge gaps
   - Set specific, measurable learning goals
   - Create learning schedule and timeline

2. **Resource Gathering**
   - Research best learning materials (books, courses, videos)
   - Join relevant online communities and forums
   - Find mentors or study partners
   - Set up learning environment and tools

### Phase 2: Core Learning (Weeks 3-8)
3. **Structured Study Sessions**
   - Daily 1-2 hour focused study blocks
   - Follow spaced repetition for retention
   - Take detailed notes and create summaries
   - Complete practice exercises regularly

4. **Practical Application**
   - Work on hands-on projects weekly
   - Apply concepts to real-world scenarios
   - Build portfolio of completed work
   - Seek feedback from peers and mentors

### Phase 3: Mastery & Application (Weeks 9-12)
5. **Advanced Practice**
   - Tackle complex, challenging projects
   - Teach concepts to others (blog, presentations)
   - Contribute to open-source projects
   - Participate in competitions or challenges

6. **Knowledge Consolidation**
   - Create comprehensive study guides
   - Take final assessment tests
   - Build capstone project demonstrating skills
   - Plan for continued learning and growth

## 📅 Weekly Schedule
- **Monday-Wednesday-Friday**: 2 hours theory and concepts
- **Tuesday-Thursday**: 1.5 hours practical exercises
- **Saturday**: 3 hours project work
- **Sunday**: Review and planning

## 📊 Progress Tracking
- Weekly knowledge assessments
- Project completion milestones
- Skill demonstration checkpoints
- Peer review and feedback sessions

## 🎯 Success Metrics
- Complete 90% of planned study sessions
- Finish 3-5 practical projects
- Achieve 80%+ on skill assessments
- Build demonstrable portfolio

## 🚧 Common Challenges & Solutions
- **Time Management**: Use time-blocking and Pomodoro technique
- **Motivation**: Set small daily wins and celebrate progress
- **Difficulty Spikes**: Break complex topics into smaller chunks
- **Information Overload**: Focus on one concept at a time

## 🎯 Immediate Next Steps
1. Take initial skill assessment today
2. Purchase/enroll in primary learning resource
3. Set up daily study schedule in calendar
4. Join 2-3 relevant learning communities

*Remember: Consistency beats intensity. Small daily progress leads to mastery.*
"#;

/// Health and fitness plan
pub const HEALTH: &str = r#"# 💪 Complete Health & Fitness Plan

## 🎯 Health Goals
Comprehensive plan for: "{{request}}"

## 🏃 Structured Fitness Journey

### Phase 1: Assessment & Foundation (Weeks 1-2)
1. **Health Assessment**
   - Complete fitness assessment (strength, cardio, flexibility)
   - Track baseline measurements (weight, body composition)
   - Consult healthcare provider if needed
   - Set SMART fitness goals

2. **Habit Formation**
   - Start with 15-20 minute daily activities
   - Focus on consistency over intensity
   - Create workout schedule that fits lifestyle
   - Prepare healthy meal prep routine

### Phase 2: Building Momentum (Weeks 3-8)
3. **Progressive Training**
   - Increase workout duration to 30-45 minutes
   - Add strength training 3x per week
   - Include cardio activities 2-3x per week
   - Focus on proper form and technique

4. **Nutrition Optimization**
   - Track daily food intake and calories
   - Increase protein intake for muscle building
   - Stay hydrated (8-10 glasses water daily)
   - Plan balanced meals with whole foods

### Phase 3: Advanced Development (Weeks 9-16)
5. **Intensity & Variety**
   - Incorporate HIIT and circuit training
   - Try new activities (swimming, hiking, yoga)
   - Challenge yourself with progressive overload
   - Focus on weak areas and imbalances

6. **Lifestyle Integration**
   - Make fitness a non-negotiable daily habit
   - Find active hobbies and social activities
   - Optimize sleep for recovery (7-9 hours)
   - Manage stress through exercise and mindfulness

## 📅 Weekly Schedule
- **Monday**: Upper body strength + 20min cardio
- **Tuesday**: Lower body strength + flexibility
- **Wednesday**: Active recovery (walking, yoga)
- **Thursday**: Full body circuit training
- **Friday**: Cardio focus (running, cycling)
- **Saturday**: Fun activity (sports, hiking)
- **Sunday**: Rest and meal prep

## 🥗 Nutrition Guidelines
- **Breakfast**: Protein + complex carbs + healthy fats
- **Lunch**: Lean protein + vegetables + whole grains
- **Dinner**: Light protein + vegetables + minimal carbs
- **Snacks**: Fruits, nuts, yogurt, protein shakes

## 📊 Progress Tracking
- Weekly weigh-ins and measurements
- Progress photos monthly
- Fitness performance metrics
- Energy levels and mood tracking

## 🎯 Success Metrics
- Lose 1-2 lbs per week (if weight loss goal)
- Increase strength by 20-30% in 3 months
- Complete 90% of planned workouts
- Improve overall energy and well-being

## ⚠️ Safety & Considerations
- Always warm up before exercising
- Listen to your body and rest when needed
- Stay hydrated during workouts
- Consult professionals for form corrections

## 🎯 Immediate Action Steps
1. Schedule fitness assessment this week
2. Plan and prep healthy meals for 3 days
3. Choose 2-3 enjoyable physical activities
4. Set up tracking system (app or journal)

*Remember: Health is a journey, not a destination. Focus on building sustainable habits that you can maintain for life.*
"#;

/// Travel plan
pub const TRAVEL: &str = r#"# ✈️ Complete Travel Planning Guide

## 🌍 Trip Overview
Detailed travel plan for: "{{request}}"

## 🗓️ Pre-Trip Planning (8-12 weeks before)

### Phase 1: Research & Booking (Weeks 1-4)
1. **Destination Research**
   - Study climate, culture, and local customs
   - Research top attractions and hidden gems
   - Read travel blogs and reviews
   - Check visa requirements and travel advisories

2. **Budget Planning**
   - Set total trip budget
   - Allocate: 40% accommodation, 30% activities, 20% food, 10% misc
   - Compare flight prices and book early
   - Research accommodation options and book

### Phase 2: Detailed Itinerary (Weeks 5-8)
3. **Day-by-Day Planning**
   - Create flexible daily itineraries
   - Book must-see attractions in advance
   - Plan transportation between locations
   - Research local restaurants and food experiences

4. **Practical Preparations**
   - Check passport expiration dates
   - Get necessary vaccinations
   - Purchase travel insurance
   - Notify banks of travel plans

### Phase 3: Final Preparations (Weeks 9-12)
5. **Packing & Documentation**
   - Create comprehensive packing checklist
   - Organize all travel documents
   - Download offline maps and translation apps
   - Prepare emergency contact information

6. **Last-Minute Details**
   - Confirm all bookings and reservations
   - Check-in for flights 24 hours prior
   - Pack carry-on with essentials
   - Set up international phone plan

## 📅 Sample 7-Day Itinerary
- **Day 1**: Arrival, light exploration, welcome dinner
- **Day 2-3**: Major attractions, guided tour, local markets
- **Day 4-5**: Day trips and unique local experiences
- **Day 6**: Relaxation and souvenir shopping
- **Day 7**: Final sightseeing and departure

## 💰 Budget Breakdown
- **Flights**: book 6-8 weeks early
- **Accommodation**: mix of hotels and rentals
- **Food**: $50-80 per day
- **Activities**: prioritize must-dos
- **Emergency Fund**: 20% of total budget

## 🚨 Safety & Emergency Planning
- Register with embassy if traveling abroad
- Share itinerary with family/friends
- Keep copies of important documents
- Know emergency numbers for destination

## 🎯 Immediate Action Items
1. **This Week**: Set budget and research destinations
2. **Next Week**: Book flights and accommodation
3. **Month 1**: Plan detailed itinerary and activities
4. **Month 2**: Handle documentation and preparations

*Remember: The best trips balance planning with spontaneity. Plan the essentials but leave room for unexpected adventures!*
"#;

/// Creative project plan
pub const CREATIVE: &str = r#"# 🎨 Creative Project Masterplan

## 🌟 Creative Vision
Comprehensive plan for: "{{request}}"

## 🎭 Creative Development Process

### Phase 1: Inspiration & Ideation (Weeks 1-2)
1. **Creative Research**
   - Study masters and contemporary artists in your field
   - Collect inspiration from diverse sources
   - Create mood boards and reference collections
   - Analyze techniques and styles you admire

2. **Concept Development**
   - Brainstorm multiple creative directions
   - Sketch initial ideas and concepts
   - Define your unique artistic voice
   - Set creative goals and success criteria

### Phase 2: Skill Building & Experimentation (Weeks 3-6)
3. **Technical Skill Development**
   - Practice fundamental techniques daily
   - Take online courses or workshops
   - Experiment with different tools and mediums
   - Create small practice pieces regularly

4. **Creative Exploration**
   - Try different styles and approaches
   - Collaborate with other creatives
   - Push boundaries and take risks
   - Document your creative process

### Phase 3: Project Execution (Weeks 7-12)
5. **Main Project Creation**
   - Begin work on primary creative piece
   - Maintain consistent daily creative practice
   - Iterate and refine based on feedback
   - Stay true to your artistic vision

6. **Refinement & Polish**
   - Review and critique your work objectively
   - Make final adjustments and improvements
   - Prepare work for presentation or publication
   - Create supporting materials (artist statement, etc.)

## 📅 Daily Creative Routine
- **Morning (1-2 hours)**: Warm-up sketching, main project, technique practice
- **Evening (30 minutes)**: Review the day, plan tomorrow, gather inspiration

## 📈 Progress Milestones
- **Week 2**: Complete concept development
- **Week 4**: Finish skill-building phase
- **Week 8**: 50% completion of main project
- **Week 12**: Final project completion

## 🎯 Success Metrics
- Complete daily creative practice 90% of days
- Finish main project within timeline
- Receive positive feedback from peers
- Feel proud of creative growth and output

## 💡 Creative Challenges & Solutions
- **Creative Block**: Change environment, try new techniques
- **Perfectionism**: Set time limits, embrace "good enough"
- **Lack of Motivation**: Connect with creative community
- **Technical Difficulties**: Break down into smaller steps

## 🎯 Immediate Creative Actions
1. **Today**: Set up dedicated creative workspace
2. **This Week**: Gather inspiration and create mood board
3. **Next Week**: Start daily creative practice routine
4. **Month 1**: Complete first major milestone

*Remember: Creativity is a practice, not a talent. Show up consistently, embrace imperfection, and trust the process.*
"#;

/// Personal development plan
pub const PERSONAL: &str = r#"# 🎯 Personal Development Plan

## 🌱 Growth Objectives
Comprehensive plan for: "{{request}}"

## 🚀 Personal Transformation Journey

### Phase 1: Self-Assessment & Goal Setting (Weeks 1-2)
1. **Current State Analysis**
   - Complete honest self-assessment
   - Identify strengths and areas for improvement
   - Analyze current habits and routines
   - Define what success looks like for you

2. **SMART Goal Definition**
   - Set Specific, Measurable, Achievable goals
   - Create Relevant and Time-bound objectives
   - Break large goals into smaller milestones
   - Write down your "why" for each goal

### Phase 2: Foundation Building (Weeks 3-8)
3. **Habit Formation**
   - Start with 1-2 keystone habits
   - Use habit stacking to build routines
   - Track daily progress consistently
   - Focus on consistency over perfection

4. **Mindset Development**
   - Practice daily gratitude and reflection
   - Develop growth mindset thinking
   - Challenge limiting beliefs
   - Cultivate self-compassion and patience

### Phase 3: Momentum & Expansion (Weeks 9-16)
5. **Skill Development**
   - Invest in learning new capabilities
   - Seek feedback and mentorship
   - Practice deliberate skill building
   - Apply new skills in real situations

6. **Environment Optimization**
   - Design environment for success
   - Remove obstacles and temptations
   - Surround yourself with supportive people
   - Create systems that support your goals

## 📅 Daily Success Routine
- **Morning (30 minutes)**: Gratitude, goal review, priority task identification
- **Evening (20 minutes)**: Reflection and journaling, tomorrow's preparation

## 🎯 90-Day Milestones
- **Day 30**: Establish core daily habits
- **Day 60**: See measurable progress in key areas
- **Day 90**: Achieve first major milestone

## 🌟 Success Metrics
- Consistency in daily habits (80%+ completion)
- Measurable progress toward main goals
- Improved self-awareness and confidence
- Positive feedback from others

## ⚠️ Common Obstacles & Solutions
- **Lack of Motivation**: Connect with your deeper "why"
- **Time Constraints**: Start with micro-habits (2 minutes)
- **Perfectionism**: Focus on progress, not perfection
- **Social Pressure**: Find supportive community

## 🎯 Immediate Action Steps
1. **Today**: Complete self-assessment and define top 3 goals
2. **This Week**: Design daily routine and tracking system
3. **Next Week**: Start with one keystone habit
4. **Month 1**: Build momentum with consistent daily practice

*Remember: Small, consistent actions compound into extraordinary results. Be patient with yourself and trust the process.*
"#;

/// Generic four-phase plan for anything else
pub const GENERAL: &str = r#"# 🎯 Comprehensive Action Plan

## 📋 Project Overview
Detailed step-by-step plan for: "{{request}}"

## 🚀 Implementation Strategy

### Phase 1: Planning & Preparation (Days 1-7)
1. **Goal Definition & Research**
   - Clearly define specific, measurable objectives
   - Research best practices and methodologies
   - Identify required resources and tools
   - Set realistic timeline and milestones

2. **Resource Allocation**
   - List all necessary materials and tools
   - Allocate budget and time requirements
   - Identify team members or collaborators
   - Set up workspace and systems

### Phase 2: Foundation Building (Days 8-21)
3. **Initial Setup**
   - Create project structure and organization
   - Establish workflows and processes
   - Set up tracking and measurement systems
   - Begin with small, manageable tasks

4. **Skill Development**
   - Learn essential skills and knowledge
   - Practice fundamental techniques
   - Seek guidance from experts or mentors
   - Build confidence through small wins

### Phase 3: Active Implementation (Days 22-60)
5. **Core Execution**
   - Follow systematic approach to main tasks
   - Maintain consistent daily progress
   - Monitor quality and adjust as needed
   - Document lessons learned and insights

6. **Iterative Improvement**
   - Regular review and optimization cycles
   - Gather feedback from stakeholders
   - Make data-driven adjustments
   - Scale successful approaches

### Phase 4: Completion & Optimization (Days 61-90)
7. **Final Push & Polish**
   - Complete remaining tasks and details
   - Quality assurance and testing
   - Prepare for launch or presentation
   - Create documentation and guides

8. **Review & Future Planning**
   - Comprehensive project evaluation
   - Document successes and failures
   - Plan for maintenance and updates
   - Identify opportunities for expansion

## 📊 Success Metrics
- **Completion Rate**: 95% of planned tasks finished
- **Quality Score**: Meet or exceed defined standards
- **Timeline Adherence**: Complete within planned timeframe
- **Stakeholder Satisfaction**: Positive feedback from key parties

## 🛠️ Required Resources
- Time commitment: 1-2 hours daily
- Budget allocation: estimate based on scope
- Tools and software: list specific requirements
- Support network: Mentors, team members, communities

## ⚠️ Risk Management
- **Scope Creep**: Stick to defined objectives
- **Time Overruns**: Build in 20% buffer time
- **Quality Issues**: Regular review checkpoints
- **Resource Constraints**: Have backup plans ready

## 🎯 Immediate Action Items
1. **Today**: Define specific success criteria
2. **This Week**: Gather all necessary resources
3. **Next Week**: Begin Phase 1 implementation
4. **Month 1**: Complete foundation building

## 📈 Long-term Vision
This plan is designed to not only achieve immediate goals but also build sustainable systems and skills for future success.

*Remember: Progress over perfection. Take action today, even if it's just a small step forward.*
"#;

/// Get an embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "business" => Some(BUSINESS),
        "learning" => Some(LEARNING),
        "health" => Some(HEALTH),
        "travel" => Some(TRAVEL),
        "creative" => Some(CREATIVE),
        "personal" => Some(PERSONAL),
        "general" => Some(GENERAL),
        _ => None,
    }
}
